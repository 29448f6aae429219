//! Suffix-stripping stemmer for English terms.
//!
//! Deliberately light: it only needs to map inflected forms onto a shared
//! key so that "cat" and "cats" count as the same term.

/// Plural and third-person endings. The `ss`/`us`/`is` entries keep words
/// like "kindness", "famous" and "analysis" whole at this stage.
const PLURAL_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("sses", "ss"),
    ("oes", "o"),
    ("es", "e"),
    ("ss", "ss"),
    ("us", "us"),
    ("is", "is"),
    ("s", ""),
];

/// -ing and -ed, doubled consonant before plain.
const VERB_RULES: &[(&str, &str)] = &[
    ("pping", "p"),
    ("tting", "t"),
    ("nning", "n"),
    ("mming", "m"),
    ("dding", "d"),
    ("gging", "g"),
    ("ying", "y"),
    ("eing", "e"),
    ("uing", "ue"),
    ("ing", ""),
    ("pped", "p"),
    ("tted", "t"),
    ("nned", "n"),
    ("mmed", "m"),
    ("dded", "d"),
    ("gged", "g"),
    ("bbed", "b"),
    ("ied", "y"),
    ("eed", "ee"),
    ("ued", "ue"),
    ("ved", "ve"),
    ("ed", ""),
];

const DERIVATIONAL_RULES: &[(&str, &str)] = &[
    ("ation", ""),
    ("ition", ""),
    ("ution", ""),
    ("tion", ""),
    ("sion", ""),
    ("ment", ""),
    ("iness", "y"),
    ("ness", ""),
    ("ily", "y"),
    ("ally", "al"),
    ("ly", ""),
    ("ful", ""),
    ("less", ""),
    ("able", ""),
    ("ible", ""),
    ("ity", ""),
    ("ive", ""),
    ("ous", ""),
    ("ical", "ic"),
];

/// Reduce a case-folded word to its stem.
///
/// Plural, verb and derivational endings are stripped in that order, one
/// rule per stage, so "nations" and "nation" land on the same stem. Words of
/// three bytes or fewer are left alone, and a rule only fires when at least
/// two bytes of stem remain.
pub fn stem(word: &str) -> String {
    [PLURAL_RULES, VERB_RULES, DERIVATIONAL_RULES]
        .iter()
        .fold(word.to_string(), |current, rules| strip_suffix(current, rules))
}

fn strip_suffix(word: String, rules: &[(&str, &str)]) -> String {
    if word.len() <= 3 {
        return word;
    }

    match rules
        .iter()
        .find(|(suffix, _)| word.len() > suffix.len() + 1 && word.ends_with(suffix))
    {
        Some((suffix, replacement)) => {
            let mut stemmed = word[..word.len() - suffix.len()].to_string();
            stemmed.push_str(replacement);
            stemmed
        }
        None => word,
    }
}
