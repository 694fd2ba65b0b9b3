// ABOUTME: Free-text ingredient line parser for the recipe analyzer
// ABOUTME: Extracts quantity, unit, and item from lines such as "1 1/2 cups flour"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::conversion::IngredientUnit;
use super::IngredientRow;

/// Value of a unicode vulgar fraction character
const fn vulgar_fraction(c: char) -> Option<f64> {
    match c {
        '½' => Some(0.5),
        '¼' => Some(0.25),
        '¾' => Some(0.75),
        '⅓' => Some(1.0 / 3.0),
        '⅔' => Some(2.0 / 3.0),
        '⅛' => Some(0.125),
        _ => None,
    }
}

/// Plain decimal number made of ASCII digits and at most one period
fn parse_decimal(token: &str) -> Option<f64> {
    let well_formed = token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.matches('.').count() <= 1;
    if well_formed {
        token.parse().ok()
    } else {
        None
    }
}

/// Parse a quantity token: `2`, `1.5`, `3/4`, `½`, or `1½`
fn parse_quantity(token: &str) -> Option<f64> {
    if let Some(last) = token.chars().last() {
        if let Some(fraction) = vulgar_fraction(last) {
            let whole = &token[..token.len() - last.len_utf8()];
            if whole.is_empty() {
                return Some(fraction);
            }
            return parse_decimal(whole).map(|w| w + fraction);
        }
    }

    if let Some((numerator, denominator)) = token.split_once('/') {
        let numerator = parse_decimal(numerator)?;
        let denominator = parse_decimal(denominator)?;
        return (denominator > 0.0).then(|| numerator / denominator);
    }

    parse_decimal(token)
}

/// Split a leading token into a quantity and an optional attached unit (`100g`)
fn split_leading_quantity(token: &str) -> Option<(f64, Option<IngredientUnit>)> {
    if let Some(qty) = parse_quantity(token) {
        return Some((qty, None));
    }
    let split = token.find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '/'))?;
    let (number, suffix) = token.split_at(split);
    let qty = parse_quantity(number)?;
    let unit = IngredientUnit::parse(suffix)?;
    Some((qty, Some(unit)))
}

fn is_fraction_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => vulgar_fraction(c).is_some(),
        _ => token.contains('/'),
    }
}

/// Parse one ingredient line
///
/// Returns `None` when the line does not start with a quantity. When the word
/// after the quantity is not a unit, it stays part of the item and the unit
/// is `piece` (`"2 large eggs"`).
#[must_use]
pub fn parse_ingredient_line(line: &str) -> Option<IngredientRow> {
    let cleaned = line.trim().trim_start_matches(['-', '*', '•']).trim();
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let (mut qty, attached_unit) = split_leading_quantity(tokens.first()?)?;
    let mut index = 1;

    // Mixed number: "1 1/2", "2 ½"
    if attached_unit.is_none() && qty.fract().abs() < f64::EPSILON {
        if let Some(fraction) = tokens
            .get(index)
            .filter(|token| is_fraction_token(token))
            .and_then(|token| parse_quantity(token))
        {
            qty += fraction;
            index += 1;
        }
    }

    let unit = match attached_unit {
        Some(unit) => unit,
        None => {
            let word = tokens.get(index).map(|t| t.to_lowercase());
            let next = tokens.get(index + 1).map(|t| t.to_lowercase());
            if matches!(word.as_deref(), Some("fl" | "fl."))
                && matches!(next.as_deref(), Some("oz" | "oz."))
            {
                index += 2;
                IngredientUnit::FluidOunces
            } else if let Some(unit) = word
                .as_deref()
                .and_then(|w| IngredientUnit::parse(w.trim_end_matches(',')))
            {
                index += 1;
                unit
            } else {
                IngredientUnit::Pieces
            }
        }
    };

    let rest = tokens.get(index..).unwrap_or_default().join(" ");
    let item = rest
        .strip_prefix("of ")
        .unwrap_or(&rest)
        .trim()
        .trim_end_matches([',', '.'])
        .to_owned();

    Some(IngredientRow {
        qty: Some(qty),
        unit: unit.abbreviation().to_owned(),
        item,
    })
}

/// Parse every ingredient line of a pasted recipe, skipping lines without a quantity
#[must_use]
pub fn parse_recipe_text(text: &str) -> Vec<IngredientRow> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_ingredient_line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: &str) -> IngredientRow {
        parse_ingredient_line(line).unwrap()
    }

    #[test]
    fn test_simple_and_mixed_quantities() {
        let parsed = row("1 1/2 cups flour");
        assert_eq!(parsed.qty, Some(1.5));
        assert_eq!(parsed.unit, "cup");
        assert_eq!(parsed.item, "flour");

        assert_eq!(row("3/4 tsp salt").qty, Some(0.75));
        assert_eq!(row("2.5 kg potatoes").qty, Some(2.5));
    }

    #[test]
    fn test_unicode_fractions() {
        assert_eq!(row("½ cup milk").qty, Some(0.5));
        assert_eq!(row("1½ tbsp honey").qty, Some(1.5));
        assert_eq!(row("2 ¼ cups oats").qty, Some(2.25));
    }

    #[test]
    fn test_non_unit_word_belongs_to_item() {
        let parsed = row("2 large eggs");
        assert_eq!(parsed.unit, "piece");
        assert_eq!(parsed.item, "large eggs");
    }

    #[test]
    fn test_attached_unit_and_of() {
        let parsed = row("100g of dark chocolate");
        assert_eq!(parsed.qty, Some(100.0));
        assert_eq!(parsed.unit, "g");
        assert_eq!(parsed.item, "dark chocolate");

        let parsed = row("- 8 fl oz water");
        assert_eq!(parsed.unit, "fl oz");
        assert_eq!(parsed.item, "water");
    }

    #[test]
    fn test_lines_without_quantity_are_skipped() {
        assert!(parse_ingredient_line("salt to taste").is_none());
        assert!(parse_ingredient_line("").is_none());

        let rows = parse_recipe_text("Ingredients\n\n2 cups rice\nPinch of salt\n1 onion\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].item, "onion");
    }
}
