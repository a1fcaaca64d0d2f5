// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let mut sources: Vec<(LanguageIdentifier, String)> = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_file_name(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.push((
                    locale,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ));
            }
        }

        if let Some(dir) = i18n_dir {
            sources.extend(read_directory(Path::new(&dir)));
        }

        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();
        for (locale, source) in sources {
            let Some(bundle) = build_bundle(&locale, source) else {
                continue;
            };
            if !available_locales.contains(&locale) {
                available_locales.push(locale.clone());
            }
            // Later sources (the override directory) replace bundled ones.
            bundles.insert(locale, bundle);
        }
        available_locales.sort_by_key(|l| l.to_string());

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(
            cli_lang,
            config,
            sys_locale::get_locale(),
            &available_locales,
        )
        .unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting the named `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
                log::warn!("fluent errors while formatting '{}': {:?}", key, errors);
            }
        }
        format!("MISSING: {}", key)
    }
}

fn locale_from_file_name(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn read_directory(dir: &Path) -> Vec<(LanguageIdentifier, String)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("cannot read i18n directory {}: {}", dir.display(), err);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            let locale = locale_from_file_name(path.file_name()?.to_str()?)?;
            let source = fs::read_to_string(&path).ok()?;
            Some((locale, source))
        })
        .collect()
}

fn build_bundle(
    locale: &LanguageIdentifier,
    source: String,
) -> Option<FluentBundle<FluentResource>> {
    let resource = match FluentResource::try_new(source) {
        Ok(res) => res,
        Err((_, errors)) => {
            log::warn!("skipping invalid FTL for {}: {:?}", locale, errors);
            return None;
        }
    };
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Isolation marks would show up as stray glyphs in the footer year.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        log::warn!("duplicate FTL entries for {}: {:?}", locale, errors);
    }
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [cli_lang, config.general.language.clone(), os_locale];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|raw| raw.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

/// Exact match first, then the first available locale sharing the language.
fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    if available.contains(lang) {
        return Some(lang.clone());
    }
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::tempdir;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_language_wins() {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        let lang = resolve_locale(Some("fr".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_used_without_cli() {
        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        let lang = resolve_locale(None, &config, Some("en-US".to_string()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn os_locale_matches_by_language() {
        let lang = resolve_locale(
            None,
            &Config::default(),
            Some("fr-CA".to_string()),
            &available(),
        );
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_locale_resolves_to_none() {
        let lang = resolve_locale(
            Some("de".to_string()),
            &Config::default(),
            Some("ja-JP".to_string()),
            &available(),
        );
        assert_eq!(lang, None);
    }

    #[test]
    fn bundled_locales_are_loaded() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
        assert_eq!(i18n.tr("nav-projects"), "Projects");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn footer_substitutes_arguments_without_isolation_marks() {
        let i18n = I18n::new(Some("en-US".to_string()), None, &Config::default());
        let text = i18n.tr_with_args(
            "footer-copyright",
            &[("year", FluentValue::from("2025")), ("name", FluentValue::from("ajumohmd"))],
        );
        assert_eq!(text, "© 2025 ajumohmd. All rights reserved.");
    }

    #[test]
    fn override_directory_replaces_bundled_strings() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("en-US.ftl"), "nav-projects = Work\n").expect("write ftl");

        let i18n = I18n::new(
            Some("en-US".to_string()),
            Some(dir.path().to_string_lossy().into_owned()),
            &Config::default(),
        );
        assert_eq!(i18n.tr("nav-projects"), "Work");
    }

    #[test]
    fn set_locale_ignores_unknown_locale() {
        let mut i18n = I18n::new(Some("fr".to_string()), None, &Config::default());
        i18n.set_locale("de".parse().unwrap());
        assert_eq!(i18n.current_locale(), &"fr".parse::<LanguageIdentifier>().unwrap());
    }
}
