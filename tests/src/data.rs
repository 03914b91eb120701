use std::fs;

/// тексты на разных языках: (название файла без расширения, содержимое)
pub fn files() -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = fs::read_dir("./../test_data/texts")
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let path = path.to_str().unwrap();

            (name(path).to_owned(), fs::read_to_string(path).unwrap())
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// название файла без пути и расширения
fn name(filename: &str) -> &str
{
    let (_, name) = filename.trim_end_matches(".txt").rsplit_once('/').unwrap();

    name
}
