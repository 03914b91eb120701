pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// группа бенчмарков: нормализатор, применяемый к каждому тексту из папки
#[macro_export]
macro_rules! group {
    ($dir: expr, $fn: ident, $group: expr, $name: expr, $normalizer: expr) => {
        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let normalizer = $normalizer;

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (name, text) in group::read_dir($dir) {
                group.throughput(criterion::Throughput::Bytes(text.len() as u64));
                group.bench_with_input(
                    criterion::BenchmarkId::new($name, &name),
                    text.as_str(),
                    |b, text| b.iter(|| normalizer.normalize(criterion::black_box(text))),
                );
            }

            group.finish();
        }
    };
}

/// прочитать папку с тестовыми текстами. каждый текст повторяется дважды
pub fn read_dir(dir: &str) -> Vec<(String, String)>
{
    let mut data: Vec<(String, String)> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let path = path.to_str().unwrap();

            (get_name(path).to_owned(), std::fs::read_to_string(path).unwrap().repeat(2))
        })
        .collect();

    data.sort_by(|a, b| a.0.cmp(&b.0));

    data
}

/// вырезать из полного пути к файлу его название, без формата
fn get_name(filename: &str) -> &str
{
    let (_, name) = filename.trim_end_matches(".txt").rsplit_once('/').unwrap();

    name
}
