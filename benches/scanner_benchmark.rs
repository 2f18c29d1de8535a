use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use greppy::extract::{extract_input_names, extract_js_variables, extract_parameters};

fn sample_page() -> String {
    let mut page = String::from("<!DOCTYPE html><html><head><title>Login</title></head><body>");
    for i in 0..200 {
        page.push_str(&format!(
            "<form action=\"/f{i}\"><input name=\"field{i}\" type=\"text\"><input type=\"submit\"></form>\n\
             <script>var state{i} = {{}}; let user{i} = \"guest\"; const limit{i} = {i};</script>\n"
        ));
    }
    page.push_str("</body></html>");
    page
}

fn scanner_benchmark(c: &mut Criterion) {
    let page = sample_page();
    let urls: Vec<String> = (0..1000)
        .map(|i| format!("https://example.com/api/v{}/items?id={}&sort=asc&p{}=1", i % 3, i, i % 50))
        .collect();

    c.bench_function("extract_input_names", |b| {
        b.iter(|| extract_input_names(black_box(&page)))
    });
    c.bench_function("extract_js_variables", |b| {
        b.iter(|| extract_js_variables(black_box(&page)))
    });
    c.bench_function("extract_parameters", |b| {
        b.iter(|| extract_parameters(black_box(&urls)))
    });
}

criterion_group!(benches, scanner_benchmark);
criterion_main!(benches);
