//! Property-based tests for the library service rules.

#[cfg(test)]
mod tests {
    use crate::app::LibraryService;
    use crate::domain::error::ErrorKind;
    use crate::domain::model::{Author, Book};
    use crate::domain::validation::{validate_book_fields, DEFAULT_PUBLICATIONS};
    use crate::domain::ValidationRules;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn seeded_service(rt: &tokio::runtime::Runtime) -> LibraryService {
        let service = LibraryService::with_clock(ValidationRules::default(), fixed_today);
        rt.block_on(service.seed_fixtures()).unwrap();
        service
    }

    /// Publication names that are not in the default allowed set.
    fn unknown_publication_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z ]{0,16}".prop_filter("must not be an allowed publication", |p| {
            !DEFAULT_PUBLICATIONS.contains(&p.as_str())
        })
    }

    /// Well-formed `d/m/yyyy` dates inside the accepted range.
    fn valid_date_strategy() -> impl Strategy<Value = String> {
        (1u32..=28, 1u32..=12, 1900i32..=2023).prop_map(|(d, m, y)| format!("{d}/{m}/{y}"))
    }

    /// Well-formed dates before 1900 or after the fixed "today".
    fn out_of_range_date_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            (1u32..=28, 1u32..=12, 1i32..=1899).prop_map(|(d, m, y)| format!("{d}/{m}/{y}")),
            (1i64..=30_000).prop_map(|days| {
                (fixed_today() + Duration::days(days))
                    .format("%-d/%-m/%Y")
                    .to_string()
            }),
        ]
    }

    /// Create operations (`Some(name)`) interleaved with deletes of the last created id (`None`).
    fn author_ops_strategy() -> impl Strategy<Value = Vec<Option<String>>> {
        prop::collection::vec(prop::option::weighted(0.7, "[A-Za-z]{1,12}"), 1..40)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_unknown_publication_is_rejected_and_store_unchanged(
            publication in unknown_publication_strategy(),
            date in valid_date_strategy(),
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let service = seeded_service(&rt);
            let before = rt.block_on(service.list_books());
            let stats_before = rt.block_on(service.stats());

            let result = rt.block_on(service.create_book(Book::new("t", 1, publication, date)));
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidPublication);
            prop_assert_eq!(rt.block_on(service.list_books()), before);
            prop_assert_eq!(rt.block_on(service.stats()), stats_before);
        }

        #[test]
        fn test_out_of_range_date_is_invalid(date in out_of_range_date_strategy()) {
            let rules = ValidationRules::default();
            let book = Book::new("t", 1, "penguin", date.clone());
            let result = validate_book_fields(&book, &rules, fixed_today());
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidDate, "date {}", date);

            let rt = tokio::runtime::Runtime::new().unwrap();
            let service = seeded_service(&rt);
            let result = rt.block_on(service.create_book(book));
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidDate);
            prop_assert_eq!(rt.block_on(service.list_books()).len(), 3);
        }

        #[test]
        fn test_in_range_date_is_accepted(date in valid_date_strategy()) {
            let book = Book::new("t", 1, "penguin", date.clone());
            let result = validate_book_fields(&book, &ValidationRules::default(), fixed_today());
            prop_assert!(result.is_ok(), "date {}", date);
        }

        #[test]
        fn test_created_author_ids_exceed_every_earlier_id(ops in author_ops_strategy()) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let service = LibraryService::with_clock(ValidationRules::default(), fixed_today);
            let mut highest = 0;
            let mut last_created = None;

            for op in ops {
                match op {
                    Some(name) => {
                        let author = rt
                            .block_on(service.create_author(Author::new(name, "Paul", "", None)))
                            .unwrap();
                        prop_assert!(author.id > highest, "id {} after {}", author.id, highest);
                        highest = author.id;
                        last_created = Some(author.id);
                    }
                    None => {
                        if let Some(id) = last_created.take() {
                            rt.block_on(service.delete_author(id)).unwrap();
                            let lookup = rt.block_on(service.get_author(id));
                            prop_assert_eq!(lookup.unwrap_err().kind(), ErrorKind::NotFound);
                        }
                    }
                }
            }
        }
    }
}
