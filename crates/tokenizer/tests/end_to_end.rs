//! Train, persist, reload and encode through the public API.

use mergetok_tokenizer::io::merges;
use mergetok_tokenizer::{
    MergeRules, Normalizer, Pair, Tokenizer, TokenizerLoader, TrainingConfig,
};
use proptest::prelude::*;

const CORPUS: &str = "low lower lowest low lower lowest";

#[test]
fn learned_merges_survive_a_merge_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("merges.txt");

    let rules = mergetok_training::train(CORPUS, 10, "</w>").unwrap();
    merges::save(&rules, &path).unwrap();
    let loaded = merges::load(&path).unwrap();

    assert!(loaded.is_clean());
    assert_eq!(loaded.rules, rules);

    let contents = std::fs::read_to_string(&path).unwrap();
    let first_lines: Vec<&str> = contents.lines().take(4).collect();
    assert_eq!(first_lines, vec!["l o", "lo w", "low e", "low </w>"]);
}

#[test]
fn hand_edited_merge_file_is_loaded_leniently() {
    let dir = tempfile::tempdir().unwrap();
    let config = TrainingConfig::builder().max_merges(10).build().unwrap();
    Tokenizer::train(CORPUS, &config)
        .unwrap()
        .save(dir.path())
        .unwrap();

    let merges_path = dir.path().join("merges.txt");
    let mut contents = std::fs::read_to_string(&merges_path).unwrap();
    contents.insert_str(0, "three field line\n");
    std::fs::write(&merges_path, contents).unwrap();

    let loaded = TokenizerLoader::load(dir.path()).unwrap();
    assert_eq!(loaded.skipped.len(), 1);
    assert_eq!(loaded.skipped[0].content, "three field line");
    assert_eq!(loaded.tokenizer.len(), 9);
    assert_eq!(loaded.tokenizer.rank_of(&Pair::new("l", "o")), Some(0));
}

#[test]
fn cleaned_corpus_trains_the_same_rules() {
    let messy = "  low\tlower\r\n\r\nlowest \n low lower\rlowest  ";
    let cleaned = Normalizer::default().clean(messy);
    assert_eq!(cleaned, CORPUS);

    let config = TrainingConfig::builder().max_merges(10).build().unwrap();
    let from_messy = Tokenizer::train(messy, &config).unwrap();
    let from_clean = Tokenizer::train(&cleaned, &config).unwrap();
    assert_eq!(from_messy.merges(), from_clean.merges());
}

#[test]
fn tokenizer_is_shared_across_threads() {
    let config = TrainingConfig::builder().max_merges(10).build().unwrap();
    let tokenizer = std::sync::Arc::new(Tokenizer::train(CORPUS, &config).unwrap());

    let handles: Vec<_> = ["lowest", "lower", "lowly", "slow"]
        .into_iter()
        .map(|word| {
            let tokenizer = tokenizer.clone();
            std::thread::spawn(move || tokenizer.decode(&[tokenizer.encode_text(word).join(" ")]))
        })
        .collect();

    let decoded: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(decoded, vec!["lowest", "lower", "lowly", "slow"]);
}

fn word() -> impl Strategy<Value = String> {
    "[a-f]{1,8}"
}

proptest! {
    #[test]
    fn encode_decode_round_trips(words in prop::collection::vec(word(), 1..10), max_merges in 1usize..40) {
        let corpus = words.join(" ");
        let config = TrainingConfig::builder().max_merges(max_merges).build().unwrap();
        let tokenizer = Tokenizer::train(&corpus, &config).unwrap();

        for w in &words {
            let joined = tokenizer
                .encode(w)
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            prop_assert!(!joined.is_empty());
            prop_assert_eq!(tokenizer.decode(&[joined]), w.clone());
        }

        prop_assert_eq!(tokenizer.decode_text(&tokenizer.encode_text(&corpus)), corpus);
    }

    #[test]
    fn words_containing_marker_text_round_trip(
        words in prop::collection::vec("[a-c_]{0,7}[a-c]", 1..10),
        max_merges in 1usize..40,
    ) {
        let corpus = words.join(" ");
        let config = TrainingConfig::builder()
            .max_merges(max_merges)
            .boundary("_")
            .build()
            .unwrap();
        let tokenizer = Tokenizer::train(&corpus, &config).unwrap();

        for w in &words {
            let joined = tokenizer
                .encode(w)
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            prop_assert_eq!(tokenizer.decode(&[joined]), w.clone());
        }

        prop_assert_eq!(tokenizer.decode_text(&tokenizer.encode_text(&corpus)), corpus);
    }

    #[test]
    fn merge_table_text_round_trips(pairs in prop::collection::vec(("[a-z<>/]{1,5}", "[a-z<>/]{1,5}"), 1..20)) {
        let rules: MergeRules = pairs.iter().map(|(a, b)| Pair::new(a.as_str(), b.as_str())).collect();
        let parsed = merges::parse(&merges::render(&rules));
        prop_assert!(parsed.is_clean());
        prop_assert_eq!(parsed.rules, rules);
    }
}
