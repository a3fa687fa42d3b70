use std::collections::HashMap;

use micro_core::lang::keywords;
use micro_core::lang::operators;
use micro_core::lang::punctuation;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );
        assert!(
            info.canonical.chars().next().is_some_and(|c| c.is_ascii_alphabetic()),
            "keyword {:?} must start with a letter to be scanned as a word",
            info.canonical
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn operator_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::as_str(info.id),
            info.canonical,
            "operator as_str mismatch for {:?}",
            info.id
        );
        assert_eq!(info.spellings.first(), Some(&info.canonical));

        for &sp in info.spellings {
            assert_eq!(
                operators::from_str(sp),
                Some(info.id),
                "operator spelling not resolvable: {}",
                sp
            );
            if let Some(prev) = seen.insert(sp, info.id) {
                panic!("duplicate operator spelling {:?}: {:?} and {:?}", sp, prev, info.id);
            }
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, punctuation::PunctuationId> = HashMap::new();

    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
        assert_eq!(
            info.canonical.chars().count(),
            1,
            "punctuation {:?} must be a single character",
            info.canonical
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate punctuation spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn no_spelling_is_claimed_by_two_registries() {
    let mut owners: HashMap<&'static str, &'static str> = HashMap::new();

    let keyword_spellings = keywords::KEYWORDS.iter().map(|k| (k.canonical, "keyword"));
    let operator_spellings = operators::OPERATORS
        .iter()
        .flat_map(|o| o.spellings.iter().map(|&sp| (sp, "operator")));
    let punctuation_spellings = punctuation::PUNCTUATION.iter().map(|p| (p.canonical, "punctuation"));

    for (spelling, registry) in keyword_spellings.chain(operator_spellings).chain(punctuation_spellings) {
        if let Some(prev) = owners.insert(spelling, registry) {
            panic!("spelling {:?} is claimed by both {} and {}", spelling, prev, registry);
        }
    }
}
