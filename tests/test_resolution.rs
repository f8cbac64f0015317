use schema_linker::resolver::ColumnResolver;

fn resolver() -> ColumnResolver {
    ColumnResolver::default()
}

const SAMPLE_SENTENCES: [&str; 8] = [
    "which author wrote the paper",
    "show the title of the paper",
    "list the venue and year of the conference",
    "who is affiliated with the place",
    "find the topic of the field",
    "give the summary of every paper",
    "keywords of the paper",
    "the of and but",
];

#[test]
fn test_vocabulary_closure() {
    let resolver = resolver();
    for sentence in SAMPLE_SENTENCES {
        for column in resolver.resolve(sentence).unwrap() {
            assert!(
                resolver.vocabulary().contains_canonical(&column),
                "{:?} produced non-vocabulary column {:?}",
                sentence,
                column
            );
        }
    }
}

#[test]
fn test_uniqueness() {
    let resolver = resolver();
    for sentence in SAMPLE_SENTENCES {
        let columns = resolver.resolve(sentence).unwrap();
        let mut deduped = columns.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(
            deduped.len(),
            columns.len(),
            "{:?} produced duplicates: {:?}",
            sentence,
            columns
        );
    }
}

#[test]
fn test_rank_ordering_follows_first_seen_scores() {
    let resolver = resolver();
    for sentence in SAMPLE_SENTENCES {
        let ranked = resolver.ranked_candidates(sentence).unwrap();
        for pair in ranked.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{:?} not sorted: {:?}",
                sentence,
                ranked
            );
        }

        // The resolved list is the ranked list with repeats removed,
        // keeping each column's first (highest-ranked) occurrence.
        let columns = resolver.resolve(sentence).unwrap();
        let mut expected = Vec::new();
        for candidate in &ranked {
            if !expected.contains(&candidate.column) {
                expected.push(candidate.column.clone());
            }
        }
        assert_eq!(columns, expected, "{:?}", sentence);
    }
}

#[test]
fn test_exact_token_scores_full_similarity_and_ranks_first() {
    let resolver = resolver();

    let ranked = resolver.ranked_candidates("show the title").unwrap();
    assert_eq!(ranked[0].column, "Title");
    assert!((ranked[0].score - 1.0).abs() < 1e-12);
    assert_eq!(resolver.resolve("show the title").unwrap()[0], "Title");

    // Ties between exact matches break by processing order.
    let columns = resolver.resolve("the year of the venue").unwrap();
    assert_eq!(columns, vec!["Year", "Venue"]);
}

#[test]
fn test_sentence_without_content_words_yields_empty_list() {
    let resolver = resolver();
    assert!(resolver.resolve("the of and but").unwrap().is_empty());
    assert!(resolver.resolve("").unwrap().is_empty());
    assert!(resolver.resolve("is was being").unwrap().is_empty());
}

#[test]
fn test_truncation_quirk_on_long_tokens() {
    let resolver = resolver();
    // "conference" is matched by its first four characters ("conf"),
    // which identify ConfID even though the full word scores only 0.5
    // against "confid" and would miss the 0.55 cutoff on its own.
    let columns = resolver.resolve("the conference").unwrap();
    assert_eq!(columns, vec!["ConfID"]);
}

#[test]
fn test_worked_example_end_to_end() {
    let resolver = resolver();
    let columns = resolver.resolve("which author wrote the paper").unwrap();
    assert_eq!(columns, vec!["PaperID", "AuthID"]);
}

#[test]
fn test_casing_does_not_change_resolution() {
    let resolver = resolver();
    let lower = resolver.resolve("which author wrote the paper").unwrap();
    let mixed = resolver.resolve("Which AUTHOR wrote THE Paper").unwrap();
    assert_eq!(lower, mixed);
}
