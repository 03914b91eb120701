use std::collections::{BTreeMap, BTreeSet};
use std::{env, fs};

/// группы бенчмарков, по одной на форму нормализации
const GROUPS: [&str; 4] = ["nfc", "nfd", "nfkc", "nfkd"];

/// преобразовать вывод `cargo bench` в CSV: строки - тексты, столбцы - реализации,
/// значения - медианное время в микросекундах
fn main()
{
    let args: Vec<String> = env::args().collect();

    let Some(file_name) = args.get(1) else {
        println!("Использование: {} <файл с выводом cargo bench>", args[0]);
        return;
    };

    let contents = match fs::read_to_string(file_name) {
        Ok(contents) => contents,
        Err(error) => {
            println!("Не удалось прочитать файл {}: {}", file_name, error);
            return;
        }
    };

    let results = parse(&contents);

    for group in GROUPS {
        println!("{}:\n{}", group.to_uppercase(), make_csv(&results, group));
    }
}

/// (группа, реализация, текст) -> время в микросекундах
type Results = BTreeMap<(String, String, String), u32>;

/// строки вида "nfc/my/english  time:   [12.345 µs 12.456 µs 12.567 µs]"
fn parse(source: &str) -> Results
{
    let mut results = Results::new();

    for line in source.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts.len() < 6 || parts[1] != "time:" {
            continue;
        }

        let key: Vec<&str> = parts[0].split('/').collect();

        if key.len() != 3 || !GROUPS.contains(&key[0]) {
            continue;
        }

        let Ok(time) = parts[4].parse::<f64>() else {
            continue;
        };

        let time = match parts[5] {
            "ns" => time / 1000.0,
            "ms" => time * 1000.0,
            "s" => time * 1_000_000.0,
            _ => time,
        };

        results.insert(
            (key[0].to_owned(), key[1].to_owned(), key[2].to_owned()),
            time.trunc() as u32,
        );
    }

    results
}

fn make_csv(results: &Results, group: &str) -> String
{
    let mut variants = BTreeSet::new();
    let mut texts = BTreeSet::new();

    for (g, variant, text) in results.keys() {
        if g == group {
            variants.insert(variant.as_str());
            texts.insert(text.as_str());
        }
    }

    let mut csv: String = variants.iter().map(|v| format!(";{}", v)).collect();
    csv.push('\n');

    for text in texts {
        csv.push_str(text);

        for variant in variants.iter() {
            let key = (group.to_owned(), variant.to_string(), text.to_owned());
            csv.push_str(&format!(";{}", results.get(&key).unwrap_or(&0)));
        }

        csv.push('\n');
    }

    csv
}
