use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use phonebook::prelude::{Contact, Field, MemStorage, PhoneBook, SaveMode};

// Helper to create a PhoneBook prepopulated with `n` contacts in memory,
// so the measured work is list/search/edit rather than disk I/O.
fn make_book_with_n(n: usize) -> PhoneBook {
    let contacts = (0..n)
        .map(|i| Contact {
            surname: format!("Surname{i}"),
            first_name: if i % 2 == 0 { "Ivan" } else { "Petr" }.to_string(),
            patronymic: String::new(),
            organization: format!("Org{}", i % 50),
            work_phone: format!("0888{i:07}"),
            personal_phone: String::new(),
        })
        .collect();

    PhoneBook::with_storage(
        Box::new(MemStorage::with_contacts(contacts)),
        SaveMode::Rewrite,
    )
    .expect("phone book not created")
}

fn bench_search(c: &mut Criterion) {
    let book = make_book_with_n(5_000);

    c.bench_function("Searching 5k contacts by surname", |b| {
        b.iter(|| black_box(book.search_field(&[], Field::Surname, black_box("name42"))));
    });

    c.bench_function("Narrowing 5k contacts by two fields", |b| {
        b.iter(|| {
            let first = book.search_field(&[], Field::FirstName, "ivan");
            black_box(book.search_field(&first, Field::Organization, black_box("org7")))
        });
    });
}

fn bench_list(c: &mut Criterion) {
    let book = make_book_with_n(5_000);

    c.bench_function("Listing 5k contacts in pages of 20", |b| {
        b.iter(|| {
            let lines: usize = book
                .list(Some(20))
                .expect("page size")
                .map(|page| page.lines().len())
                .sum();
            black_box(lines)
        });
    });
}

fn bench_edit(c: &mut Criterion) {
    c.bench_function("Editing one field of 5k contacts (in-memory rewrite)", |b| {
        b.iter_batched(
            || make_book_with_n(5_000),
            |mut book| {
                book.edit_field(2_500, Field::WorkPhone, "999")
                    .expect("edit");
                black_box(&book.mem);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_search, bench_list, bench_edit);
criterion_main!(benches);
