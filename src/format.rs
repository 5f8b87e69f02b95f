//! Display formatting for money, dates, slugs and status labels.
//!
//! Money is handled exclusively as integer minor-currency units; the
//! formatter is the only place a decimal representation appears, and
//! [`parse_money`] is its exact inverse for non-negative amounts.
//! Output follows pt-BR conventions (comma decimal separator, dotted
//! thousands groups).

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

/// Placeholder shown for missing or unparsable values.
pub const MISSING_VALUE: &str = "\u{2014}";

const PT_BR_MONTHS_SHORT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

fn currency_symbol(currency: &str) -> &str {
    match currency {
        "BRL" | "" => "R$",
        "USD" => "$",
        "EUR" => "\u{20ac}",
        other => other,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats integer minor-currency units as a pt-BR money string.
///
/// `1990` with `"BRL"` formats as `"R$ 19,90"`; amounts of a thousand
/// reais or more gain dotted thousands groups.
#[must_use]
pub fn format_money(cents: i64, currency: &str) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let whole = group_thousands(&(magnitude / 100).to_string());
    let fraction = magnitude % 100;
    format!("{sign}{} {whole},{fraction:02}", currency_symbol(currency))
}

/// Parses a money string back to integer minor-currency units.
///
/// Inverse of [`format_money`]: currency symbols and thousands dots are
/// ignored, the comma is the decimal separator. Returns `None` for
/// strings containing no digits.
#[must_use]
pub fn parse_money(text: &str) -> Option<i64> {
    let negative = text.contains('-');
    let (whole_part, fraction_part) = match text.rsplit_once(',') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    let whole_digits: String = whole_part.chars().filter(char::is_ascii_digit).collect();
    let fraction_digits: String = fraction_part.chars().filter(char::is_ascii_digit).collect();
    if whole_digits.is_empty() && fraction_digits.is_empty() {
        return None;
    }

    let whole: i64 = if whole_digits.is_empty() {
        0
    } else {
        whole_digits.parse().ok()?
    };
    // Fractions are normalized to exactly two places: "5" means 50
    // cents, a third digit is truncated.
    let fraction: i64 = match fraction_digits.len() {
        0 => 0,
        1 => fraction_digits.parse::<i64>().ok()? * 10,
        _ => fraction_digits[..2].parse().ok()?,
    };

    let cents = whole.checked_mul(100)?.checked_add(fraction)?;
    Some(if negative { -cents } else { cents })
}

fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f %z"))
        .ok()
}

/// Formats a backend timestamp as a short pt-BR date, e.g.
/// `"25 jan. 2026"`. Missing or unparsable input yields
/// [`MISSING_VALUE`].
#[must_use]
pub fn format_date(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || MISSING_VALUE.to_string(),
        |dt| {
            let month = PT_BR_MONTHS_SHORT[dt.month0() as usize];
            format!("{} {month}. {}", dt.day(), dt.year())
        },
    )
}

/// Formats a backend timestamp as a pt-BR date and time, e.g.
/// `"25/01/2026 14:30"`. Missing or unparsable input yields
/// [`MISSING_VALUE`].
#[must_use]
pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value).map_or_else(
        || MISSING_VALUE.to_string(),
        |dt| {
            format!(
                "{:02}/{:02}/{} {:02}:{:02}",
                dt.day(),
                dt.month(),
                dt.year(),
                dt.hour(),
                dt.minute()
            )
        },
    )
}

fn fold_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// Turns free text into a URL slug: lowercased, accents folded to
/// ASCII, runs of other characters collapsed to single hyphens.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars().map(fold_accent) {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Human-readable pt-BR label for an order, payment, fulfillment or
/// product status. Unknown statuses pass through unchanged.
#[must_use]
pub fn status_label(status: &str) -> &str {
    match status {
        "pending" => "Pendente",
        "confirmed" => "Confirmado",
        "processing" => "Processando",
        "shipped" => "Enviado",
        "delivered" => "Entregue",
        "cancelled" => "Cancelado",
        "awaiting" => "Aguardando",
        "paid" => "Pago",
        "failed" => "Falhou",
        "refunded" => "Reembolsado",
        "not_fulfilled" => "Não enviado",
        "fulfilled" => "Enviado",
        "partially_fulfilled" => "Parcial",
        "active" => "Ativo",
        "draft" => "Rascunho",
        "archived" => "Arquivado",
        other => other,
    }
}
