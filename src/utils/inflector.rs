//! String inflections used when building translation keys, icon names, and
//! viewer protocol attributes.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_PARAMETER_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[^a-z0-9\-_]+").expect("valid regex"));

/// Default omission marker appended by [`truncate`]
pub const OMISSION: &str = "...";

/// Make a string safe for use in keys and URLs.
///
/// Accented Latin letters are first [`transliterate`]d to ASCII. Runs of characters outside `[a-z0-9-_]` collapse into `separator`,
/// repeated separators are squeezed, leading/trailing separators are
/// stripped, and the result is lowercased.
///
/// ```
/// use geoblacklight_views::utils::inflector::parameterize;
/// assert_eq!(parameterize("Paper Map", "-"), "paper-map");
/// assert_eq!(parameterize("ArcGRID", "_"), "arcgrid");
/// assert_eq!(parameterize("Esri Geodatabase", "_"), "esri_geodatabase");
/// ```
pub fn parameterize(input: &str, separator: &str) -> String {
    let ascii = transliterate(input);
    let replaced = NON_PARAMETER_CHARS.replace_all(&ascii, separator);
    let mut result = replaced.into_owned();

    if !separator.is_empty() {
        let doubled = format!("{}{}", separator, separator);
        while result.contains(&doubled) {
            result = result.replace(&doubled, separator);
        }
        while result.starts_with(separator) {
            result = result[separator.len()..].to_string();
        }
        while result.ends_with(separator) {
            result.truncate(result.len() - separator.len());
        }
    }

    result.to_lowercase()
}

/// Replace accented Latin letters with their closest ASCII spelling.
///
/// Characters without an approximation are kept as-is.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match approximate(c) {
            Some(ascii) => out.push_str(ascii),
            None => out.push(c),
        }
    }
    out
}

fn approximate(c: char) -> Option<&'static str> {
    let ascii = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => "A",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
        'Æ' => "AE",
        'æ' => "ae",
        'Ç' | 'Ć' | 'Ĉ' | 'Ċ' | 'Č' => "C",
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => "c",
        'Ð' | 'Ď' | 'Đ' => "D",
        'ð' | 'ď' | 'đ' => "d",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => "E",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => "e",
        'Ĝ' | 'Ğ' | 'Ġ' | 'Ģ' => "G",
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => "g",
        'Ĥ' | 'Ħ' => "H",
        'ĥ' | 'ħ' => "h",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Ĭ' | 'Į' | 'İ' => "I",
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => "i",
        'Ĵ' => "J",
        'ĵ' => "j",
        'Ķ' => "K",
        'ķ' => "k",
        'Ĺ' | 'Ļ' | 'Ľ' | 'Ŀ' | 'Ł' => "L",
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => "l",
        'Ñ' | 'Ń' | 'Ņ' | 'Ň' => "N",
        'ñ' | 'ń' | 'ņ' | 'ň' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' | 'Ŏ' | 'Ő' => "O",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => "o",
        'Œ' => "OE",
        'œ' => "oe",
        'Ŕ' | 'Ŗ' | 'Ř' => "R",
        'ŕ' | 'ŗ' | 'ř' => "r",
        'Ś' | 'Ŝ' | 'Ş' | 'Š' => "S",
        'ś' | 'ŝ' | 'ş' | 'š' => "s",
        'ß' => "ss",
        'Ţ' | 'Ť' | 'Ŧ' => "T",
        'ţ' | 'ť' | 'ŧ' => "t",
        'Þ' => "TH",
        'þ' => "th",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ŭ' | 'Ů' | 'Ű' | 'Ų' => "U",
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => "u",
        'Ŵ' => "W",
        'ŵ' => "w",
        'Ý' | 'Ŷ' | 'Ÿ' => "Y",
        'ý' | 'ÿ' | 'ŷ' => "y",
        'Ź' | 'Ż' | 'Ž' => "Z",
        'ź' | 'ż' | 'ž' => "z",
        _ => return None,
    };
    Some(ascii)
}

/// Convert `snake_case` (and `path/segments`) into `UpperCamelCase`.
///
/// `dynamic_map_layer` becomes `DynamicMapLayer`, `wms` becomes `Wms`.
pub fn camelize(input: &str) -> String {
    input
        .split('/')
        .map(|segment| {
            segment
                .split('_')
                .filter(|part| !part.is_empty())
                .map(capitalize)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("::")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Cap `text` at `length` characters, counting the [`OMISSION`] marker.
///
/// Text already within the limit is returned unchanged.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }

    let stop = length.saturating_sub(OMISSION.chars().count());
    let mut truncated: String = text.chars().take(stop).collect();
    truncated.push_str(OMISSION);
    truncated
}
