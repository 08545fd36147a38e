use criterion::{black_box, criterion_group, criterion_main, Criterion};

use squall::query::{Lexer, Token};
use squall::{parse_query_string, QueryStringOptions};

fn bench_lexer(c: &mut Criterion) {
    let options = QueryStringOptions::default();

    c.bench_function("lex_field_phrase", |b| {
        b.iter(|| {
            let mut lexer = Lexer::new(black_box(r#"+field4:"test phrase 1""#), &options);
            let mut tokens = Vec::new();
            loop {
                match lexer.next_token() {
                    Ok(Token::Eof) => break,
                    Ok(token) => tokens.push(token),
                    Err(_) => break,
                }
            }
            tokens
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let options = QueryStringOptions::default();

    c.bench_function("parse_implicit_phrases", |b| {
        b.iter(|| {
            parse_query_string(
                black_box("animated scifi Tag:test comedy movies"),
                &options,
            )
        })
    });

    c.bench_function("parse_mixed_clauses", |b| {
        b.iter(|| {
            parse_query_string(
                black_box(
                    r#"+title:rust -status:draft score:>=4.5 name:/mar.*ty/ "exact phrase"^2 watex~2"#,
                ),
                &options,
            )
        })
    });
}

criterion_group!(benches, bench_lexer, bench_parse);
criterion_main!(benches);
