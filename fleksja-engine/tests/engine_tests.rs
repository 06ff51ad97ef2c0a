//! Integration tests for fleksja-engine

use fleksja_core::morph::Dictionary;
use fleksja_core::{Analyzer, AnalyzerError, MorphCandidate};
use fleksja_engine::{
    EngineConfig, EngineError, Enricher, ExecutionMode, FailurePolicy, LabelConfig,
};
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn dictionary() -> Dictionary {
    Dictionary::new()
        .with_entry("Annę", "Anna", "subst:sg:acc:f", &["imię"])
        .with_entry("Janem", "Jan", "subst:sg:inst:m1", &["imię"])
        .with_entry("Krakowie", "Kraków", "subst:sg:loc:m3", &["nazwa_geograficzna"])
        .with_entry("Sącza", "Sącz", "subst:sg:gen:m3", &["nazwa_geograficzna"])
        .with_entry("kobietą", "kobieta", "subst:sg:inst:f", &[])
}

fn factory() -> impl Fn() -> Result<Dictionary, AnalyzerError> + Sync {
    || Ok(dictionary())
}

/// Panics on one word form
struct Tripwire {
    inner: Dictionary,
    trigger: &'static str,
}

impl Analyzer for Tripwire {
    fn analyse(&self, word: &str) -> Result<Vec<MorphCandidate>, AnalyzerError> {
        if word == self.trigger {
            panic!("tripwire hit on {word}");
        }
        self.inner.analyse(word)
    }
}

fn tripwire_factory() -> impl Fn() -> Result<Tripwire, AnalyzerError> + Sync {
    || {
        Ok(Tripwire {
            inner: dictionary(),
            trigger: "Krakowie",
        })
    }
}

const ORIGINAL: &str = "Spotkał Annę.\nMieszka w Krakowie.\nRozmawiał z Janem.\nBył w Nowego Sącza.\n";
const ANONYMIZED: &str = "Spotkał [name].\nMieszka w [city].\nRozmawiał z [name].\nBył w [city].\n";

#[test]
fn test_sequential_document() {
    let enricher = Enricher::builder()
        .config(EngineConfig::sequential())
        .build()
        .unwrap();
    let output = enricher.process(ORIGINAL, ANONYMIZED, &factory()).unwrap();

    assert_eq!(
        output.text,
        "Spotkał [name][woman][accusative].\n\
         Mieszka w [city][locative].\n\
         Rozmawiał z [name][man][instrumental].\n\
         Był w [city][genitive].\n"
    );
    assert_eq!(output.stats.execution_mode, ExecutionMode::Sequential);
    assert_eq!(output.stats.lines, 4);
    assert_eq!(output.stats.placeholders, 4);
    assert_eq!(output.stats.enriched, 4);
    assert_eq!(output.stats.workers, 1);
    assert!(output.stats.failures.is_empty());
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    let original = ORIGINAL.repeat(25);
    let anonymized = ANONYMIZED.repeat(25);

    let sequential = Enricher::builder()
        .config(EngineConfig::sequential())
        .build()
        .unwrap()
        .process(&original, &anonymized, &factory())
        .unwrap();

    for threads in [1, 2, 3, 8] {
        let parallel = Enricher::builder()
            .config(EngineConfig::parallel(Some(threads)))
            .build()
            .unwrap()
            .process(&original, &anonymized, &factory())
            .unwrap();
        assert_eq!(parallel.text, sequential.text, "threads = {threads}");
        assert_eq!(parallel.stats.execution_mode, ExecutionMode::Parallel);
        assert_eq!(parallel.stats.enriched, sequential.stats.enriched);
        assert!(parallel.stats.workers <= threads);
    }
}

#[test]
fn test_extra_anonymized_lines_are_dropped() {
    let output = Enricher::new()
        .process(
            "Spotkał Annę.\n",
            "Spotkał [name].\nTej linii nie ma w oryginale.\n",
            &factory(),
        )
        .unwrap();
    assert_eq!(output.text, "Spotkał [name][woman][accusative].\n");
    assert_eq!(output.stats.lines, 1);
    assert_eq!(output.stats.dropped_anonymized_lines, 1);
    assert_eq!(output.stats.dropped_original_lines, 0);
}

#[test]
fn test_extra_original_lines_are_dropped() {
    let output = Enricher::new()
        .process("a\nb\nc\n", "a\n", &factory())
        .unwrap();
    assert_eq!(output.text, "a\n");
    assert_eq!(output.stats.dropped_original_lines, 2);
}

#[test]
fn test_failed_line_is_isolated() {
    for config in [EngineConfig::sequential(), EngineConfig::parallel(Some(3))] {
        let enricher = Enricher::builder().config(config).build().unwrap();
        let output = enricher
            .process(ORIGINAL, ANONYMIZED, &tripwire_factory())
            .unwrap();

        assert_eq!(
            output.text,
            "Spotkał [name][woman][accusative].\n\
             Mieszka w [city].\n\
             Rozmawiał z [name][man][instrumental].\n\
             Był w [city][genitive].\n"
        );
        assert_eq!(output.stats.failures.len(), 1);
        assert_eq!(output.stats.failures[0].index, 1);
        assert!(output.stats.failures[0].reason.contains("tripwire"));
    }
}

#[test]
fn test_panicking_factory_is_isolated() {
    let expected = [
        "Spotkał [name][woman][accusative].\n",
        "Mieszka w [city][locative].\n",
        "Rozmawiał z [name][man][instrumental].\n",
        "Był w [city][genitive].\n",
    ];
    let anonymized: Vec<&str> = ANONYMIZED.split_inclusive('\n').collect();

    for config in [EngineConfig::sequential(), EngineConfig::parallel(Some(2))] {
        let created = AtomicUsize::new(0);
        let factory = || -> Result<Dictionary, AnalyzerError> {
            if created.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("dictionary backend crashed");
            }
            Ok(dictionary())
        };

        let enricher = Enricher::builder().config(config).build().unwrap();
        let output = enricher.process(ORIGINAL, ANONYMIZED, &factory).unwrap();

        assert_eq!(output.stats.failures.len(), 1);
        let failure = &output.stats.failures[0];
        assert!(failure.reason.contains("dictionary backend crashed"));

        let lines: Vec<&str> = output.text.split_inclusive('\n').collect();
        assert_eq!(lines.len(), 4);
        for (index, line) in lines.iter().enumerate() {
            if index == failure.index {
                assert_eq!(*line, anonymized[index]);
            } else {
                assert_eq!(*line, expected[index]);
            }
        }
    }
}

#[test]
fn test_panicking_factory_retried_on_next_line() {
    let created = AtomicUsize::new(0);
    let factory = || -> Result<Dictionary, AnalyzerError> {
        if created.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("dictionary backend crashed");
        }
        Ok(dictionary())
    };

    let output = Enricher::builder()
        .config(EngineConfig::sequential())
        .build()
        .unwrap()
        .process("Annę.\nAnnę.\n", "[name].\n[name].\n", &factory)
        .unwrap();

    assert_eq!(output.text, "[name].\n[name][woman][accusative].\n");
    assert_eq!(output.stats.failures.len(), 1);
    assert_eq!(output.stats.failures[0].index, 0);
    assert_eq!(created.load(Ordering::SeqCst), 2);
}

#[test]
fn test_abort_policy_fails_batch() {
    let enricher = Enricher::builder()
        .execution_mode(ExecutionMode::Sequential)
        .failure_policy(FailurePolicy::Abort)
        .build()
        .unwrap();
    let err = enricher
        .process(ORIGINAL, ANONYMIZED, &tripwire_factory())
        .unwrap_err();
    assert!(matches!(err, EngineError::BatchAborted { index: 1, .. }));
}

#[test]
fn test_unavailable_dictionary_leaves_text_unchanged() {
    let factory = || -> Result<Dictionary, AnalyzerError> {
        Err(AnalyzerError::Unavailable("dictionary not installed".into()))
    };
    let output = Enricher::builder()
        .config(EngineConfig::parallel(Some(2)))
        .build()
        .unwrap()
        .process(ORIGINAL, ANONYMIZED, &factory)
        .unwrap();
    assert_eq!(output.text, ANONYMIZED);
    assert_eq!(output.stats.failures.len(), 4);
}

#[test]
fn test_custom_labels() {
    let labels = LabelConfig::from_toml_str(
        r#"
[metadata]
code = "pl"
name = "Names only, Polish case names"

[enrichment]
case_naming = "polish"

[[labels]]
name = "name"
policy = "inflected"
"#,
    )
    .unwrap();
    let output = Enricher::builder()
        .labels(labels)
        .build()
        .unwrap()
        .process(ORIGINAL, ANONYMIZED, &factory())
        .unwrap();
    assert_eq!(
        output.text,
        "Spotkał [name][woman][biernik].\n\
         Mieszka w [city].\n\
         Rozmawiał z [name][man][narzędnik].\n\
         Był w [city].\n"
    );
}

#[test]
fn test_builder_rejects_zero_threads() {
    let err = Enricher::builder().threads(Some(0)).build().unwrap_err();
    assert!(matches!(err, EngineError::ConfigError(_)));
}

#[test]
fn test_empty_documents() {
    let output = Enricher::new().process("", "", &factory()).unwrap();
    assert_eq!(output.text, "");
    assert_eq!(output.stats.lines, 0);
}

#[test]
fn test_cache_counters_in_stats() {
    let output = Enricher::new()
        .process(ORIGINAL, ANONYMIZED, &factory())
        .unwrap();
    let stats = &output.stats;
    assert_eq!(stats.cache.failures, 0);
    assert!(stats.cache_size >= 4);
    assert!(stats.processing_time_ms >= 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_equals_sequential_for_any_worker_count(
        lines in prop::collection::vec(0usize..4, 0..40),
        threads in 1usize..6,
    ) {
        let original_lines: Vec<&str> = ORIGINAL.split_inclusive('\n').collect();
        let anonymized_lines: Vec<&str> = ANONYMIZED.split_inclusive('\n').collect();
        let original: String = lines.iter().map(|&i| original_lines[i]).collect();
        let anonymized: String = lines.iter().map(|&i| anonymized_lines[i]).collect();

        let sequential = Enricher::builder()
            .config(EngineConfig::sequential())
            .build()
            .unwrap()
            .process(&original, &anonymized, &factory())
            .unwrap();
        let parallel = Enricher::builder()
            .config(EngineConfig::parallel(Some(threads)))
            .build()
            .unwrap()
            .process(&original, &anonymized, &factory())
            .unwrap();
        prop_assert_eq!(parallel.text, sequential.text);
    }
}
