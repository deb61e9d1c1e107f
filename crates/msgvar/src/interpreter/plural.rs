//! CLDR plural category resolution.
//!
//! This module provides plural category resolution following CLDR rules.
//! Different languages have different plural rules - English has "one" and
//! "other" for cardinals, while Russian has "one", "few", "many", and
//! "other", and Arabic uses all six categories. Ordinal rules differ again:
//! English ordinals use "one" (1st), "two" (2nd), "few" (3rd), "other".
//!
//! Categorization is an injected capability: the engine takes any
//! `PluralCategorizer`, so it is testable without locale data and portable
//! across runtimes with different plural-rule sources. The default
//! `IcuCategorizer` caches `PluralRules` per thread per (language, kind)
//! to avoid re-creating instances on every call.

use std::cell::RefCell;

use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

/// Which CLDR rule set to categorize against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluralKind {
    /// Cardinal numbers: "1 item", "2 items".
    #[default]
    Cardinal,
    /// Ordinal numbers: "1st", "2nd", "3rd".
    Ordinal,
}

/// The locale-aware categorization capability consumed by the selector
/// evaluator.
///
/// Implementations must be pure for a given `(lang, n, kind)` triple and
/// safe to call concurrently; the engine offers no serialization point
/// of its own.
pub trait PluralCategorizer {
    /// Get the CLDR plural category for a number in a given language.
    ///
    /// Returns one of: "zero", "one", "two", "few", "many", "other".
    fn category(&self, lang: &str, n: i64, kind: PluralKind) -> &'static str;
}

/// The default categorizer, backed by ICU4X locale data.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuCategorizer;

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language and kind.
    static PLURAL_RULES_CACHE: RefCell<Vec<(String, PluralKind, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// Build `PluralRules` for a language code, falling back to English for
/// codes ICU cannot parse or has no data for.
fn build_rules(lang: &str, kind: PluralKind) -> PluralRules {
    let rule_type = match kind {
        PluralKind::Cardinal => PluralRuleType::Cardinal,
        PluralKind::Ordinal => PluralRuleType::Ordinal,
    };
    let loc = Locale::try_from_str(lang).unwrap_or_else(|_| locale!("en"));
    PluralRules::try_new(loc.into(), rule_type.into()).unwrap_or_else(|_| {
        PluralRules::try_new(locale!("en").into(), rule_type.into())
            .expect("English plural rules are bundled")
    })
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

impl PluralCategorizer for IcuCategorizer {
    fn category(&self, lang: &str, n: i64, kind: PluralKind) -> &'static str {
        PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
            if let Some((_, _, rules)) = cache
                .iter()
                .find(|(code, cached_kind, _)| code.as_str() == lang && *cached_kind == kind)
            {
                return category_str(rules.category_for(n));
            }
            let rules = build_rules(lang, kind);
            let category = category_str(rules.category_for(n));
            cache.push((lang.to_string(), kind, rules));
            category
        })
    }
}

/// Get the CLDR plural category for a number in a given language.
///
/// Convenience wrapper over the default `IcuCategorizer`. Rules are
/// cached per thread per (language, kind), so repeated calls with the
/// same language reuse the previously constructed `PluralRules`.
///
/// # Examples
///
/// ```
/// use msgvar::{PluralKind, plural_category};
///
/// // English cardinals: 1 = "one", everything else = "other"
/// assert_eq!(plural_category("en", 1, PluralKind::Cardinal), "one");
/// assert_eq!(plural_category("en", 5, PluralKind::Cardinal), "other");
///
/// // English ordinals: 1st, 2nd, 3rd, 11th
/// assert_eq!(plural_category("en", 1, PluralKind::Ordinal), "one");
/// assert_eq!(plural_category("en", 2, PluralKind::Ordinal), "two");
/// assert_eq!(plural_category("en", 11, PluralKind::Ordinal), "other");
///
/// // Russian cardinals: complex rules for "one", "few", "many"
/// assert_eq!(plural_category("ru", 2, PluralKind::Cardinal), "few");
/// assert_eq!(plural_category("ru", 5, PluralKind::Cardinal), "many");
/// ```
pub fn plural_category(lang: &str, n: i64, kind: PluralKind) -> &'static str {
    IcuCategorizer.category(lang, n, kind)
}
