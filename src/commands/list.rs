use clap::ValueEnum;

use yait::{Extra, Library, Licence, Style};

/// What `yait list` prints
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    Licences,
    Styles,
    Libraries,
    Extras,
}

pub fn execute(what: Listing) {
    for line in lines(what) {
        println!("{line}");
    }
}

fn lines(what: Listing) -> Vec<String> {
    match what {
        Listing::Licences => describe(Licence::value_variants(), Some(Licence::default())),
        Listing::Styles => describe(Style::value_variants(), Some(Style::default())),
        Listing::Libraries => Library::value_variants()
            .iter()
            .map(|lib| format!("{:<10} {}", lib.to_string(), lib.url()))
            .collect(),
        Listing::Extras => describe(Extra::value_variants(), None),
    }
}

fn describe<T: ValueEnum + PartialEq + ToString>(variants: &[T], default: Option<T>) -> Vec<String> {
    variants
        .iter()
        .map(|v| {
            let help = v
                .to_possible_value()
                .and_then(|p| p.get_help().map(|h| h.to_string()))
                .unwrap_or_default();
            let marker = if default.as_ref() == Some(v) { " (default)" } else { "" };
            format!("{:<10} {help}{marker}", v.to_string())
        })
        .collect()
}
