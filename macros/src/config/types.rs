//! Type helper functions for Config derive macro.

use quote::quote;
use syn::Type;

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .or_else(|| name.strip_suffix("Settings"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Strip one `Option<..>` layer from a type string.
pub fn unwrap_option(ty: &str) -> &str {
    ty.strip_prefix("Option<")
        .and_then(|inner| inner.strip_suffix('>'))
        .unwrap_or(ty)
}

/// Format default value based on field type.
/// Strings and enums get quoted, numbers, booleans and arrays are used as-is.
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    let ty = unwrap_option(ty);
    let is_literal = ty.starts_with("Vec<")
        || matches!(
            ty,
            "bool"
                | "u8"
                | "u16"
                | "u32"
                | "u64"
                | "usize"
                | "i8"
                | "i16"
                | "i32"
                | "i64"
                | "isize"
                | "f32"
                | "f64"
        );
    if is_literal {
        value.to_string()
    } else {
        format!("\"{}\"", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_section() {
        assert_eq!(infer_section("HeatmapConfig"), "heatmap");
        assert_eq!(infer_section("SiteInfoConfig"), "site_info");
        assert_eq!(infer_section("I18nSettings"), "i18n");
    }

    #[test]
    fn test_format_default_for_type() {
        assert_eq!(format_default_for_type("20", "Option<i64>"), "20");
        assert_eq!(format_default_for_type("*", "Option<String>"), "\"*\"");
        assert_eq!(format_default_for_type("day", "Option<HeatmapUnit>"), "\"day\"");
        assert_eq!(format_default_for_type("[\"en\"]", "Vec<String>"), "[\"en\"]");
    }
}
