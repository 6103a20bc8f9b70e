//! Derive macro implementation used by `phys-units-core`.
//!
//! `phys-units-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::NamedUnit`, `crate::Quantity`, `crate::Magnitude`, `crate::Rep` and `crate::units::si`, so it is intended
//! to be used by `phys-units-core` (or by crates that expose an identical crate-root API).
//!
//! Most users should depend on `phys-units` instead and use the generated constructors in its `literals` module.
//!
//! # Generated items
//!
//! For a unit marker type `Meter` with symbol `m`, the derive emits:
//!
//! - `impl crate::NamedUnit for Meter`
//! - one `const fn` per SI prefix, next to the marker type: `Ym`, `Zm`, …, `km`, `hm`, `dam`, `m`, `dm`, `cm`,
//!   `mm`, `um`, …, `ym`. Each takes a bare magnitude and returns the quantity in base SI units.
//!
//! Constructor names that collide with a Rust keyword (`as`, atto-second) are emitted as raw identifiers.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `name = "meter"`: unit name
//! - `symbol = "m"`: unit symbol, also the stem of the constructor names
//! - `dimension = LengthD`: dimension type
//! - `factor = 1.0`: size of one unit in base SI units (optional, defaults to `1.0`)

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// SI prefixes: constructor prefix, prefix name, factor constant in `crate::units::si` (`None` for the bare unit).
const PREFIXES: [(&str, &str, Option<&str>); 21] = [
    ("Y", "yotta", Some("YOTTA")),
    ("Z", "zetta", Some("ZETTA")),
    ("E", "exa", Some("EXA")),
    ("P", "peta", Some("PETA")),
    ("T", "tera", Some("TERA")),
    ("G", "giga", Some("GIGA")),
    ("M", "mega", Some("MEGA")),
    ("k", "kilo", Some("KILO")),
    ("h", "hecto", Some("HECTO")),
    ("da", "deka", Some("DEKA")),
    ("", "", None),
    ("d", "deci", Some("DECI")),
    ("c", "centi", Some("CENTI")),
    ("m", "milli", Some("MILLI")),
    ("u", "micro", Some("MICRO")),
    ("n", "nano", Some("NANO")),
    ("p", "pico", Some("PICO")),
    ("f", "femto", Some("FEMTO")),
    ("a", "atto", Some("ATTO")),
    ("z", "zepto", Some("ZEPTO")),
    ("y", "yocto", Some("YOCTO")),
];

/// Derive `crate::NamedUnit` and the prefixed constructors for a unit marker type.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `name`, `symbol` and `dimension`, and
/// optionally `factor`.
///
/// This macro is intended for use by `phys-units-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let name = &unit_attr.name;
    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let factor = match &unit_attr.factor {
        Some(factor) => quote!(#factor),
        None => quote!(1.0),
    };

    let constructors = PREFIXES.iter().map(|(prefix, prefix_name, scale)| {
        let fn_name = constructor_ident(&format!("{}{}", prefix, symbol.value()));
        let doc = format!(
            "`x` {}{} (`{}{}`) as a quantity.",
            prefix_name,
            name.value(),
            prefix,
            symbol.value()
        );
        let scale = match scale {
            Some(constant) => {
                let constant = Ident::new(constant, Span::call_site());
                quote!(crate::units::si::#constant)
            }
            None => quote!(1.0),
        };
        quote! {
            #[doc = #doc]
            #[allow(non_snake_case)]
            #[inline]
            pub const fn #fn_name(x: crate::Rep) -> crate::Quantity<#dimension> {
                crate::Quantity::new(
                    crate::Magnitude,
                    x * (<#ident as crate::NamedUnit>::FACTOR * #scale),
                )
            }
        }
    });

    let expanded = quote! {
        impl crate::NamedUnit for #ident {
            type Dim = #dimension;
            const NAME: &'static str = #name;
            const SYMBOL: &'static str = #symbol;
            const FACTOR: crate::Rep = #factor;
        }

        #(#constructors)*
    };

    Ok(expanded)
}

/// Identifier for a constructor, raw when the text is a keyword.
fn constructor_ident(text: &str) -> Ident {
    match syn::parse_str::<Ident>(text) {
        Ok(ident) => ident,
        Err(_) => Ident::new_raw(text, Span::call_site()),
    }
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    name: LitStr,
    symbol: LitStr,
    dimension: Expr,
    factor: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut factor: Option<Expr> = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match key.to_string().as_str() {
                "name" => {
                    name = Some(input.parse()?);
                }
                "symbol" => {
                    symbol = Some(input.parse()?);
                }
                "dimension" => {
                    dimension = Some(input.parse()?);
                }
                "factor" => {
                    factor = Some(input.parse()?);
                }
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let name =
            name.ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `name`"))?;
        let symbol = symbol
            .ok_or_else(|| syn::Error::new(input.span(), "missing required attribute `symbol`"))?;
        let dimension = dimension.ok_or_else(|| {
            syn::Error::new(input.span(), "missing required attribute `dimension`")
        })?;

        if symbol.value().is_empty() {
            return Err(syn::Error::new(symbol.span(), "`symbol` must not be empty"));
        }

        Ok(UnitAttribute {
            name,
            symbol,
            dimension,
            factor,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(name = "meter", symbol = "m", dimension = LengthD, factor = 1.0)]
            pub enum Meter {}
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.name.value(), "meter");
        assert_eq!(attr.symbol.value(), "m");
        assert!(attr.factor.is_some());
    }

    #[test]
    fn test_parse_unit_attribute_factor_is_optional() {
        let input: DeriveInput = parse_quote! {
            #[unit(name = "newton", symbol = "N", dimension = ForceD)]
            pub enum Newton {}
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert!(attr.factor.is_none());
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub enum Meter {}
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_name() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", dimension = LengthD)]
            pub enum Meter {}
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `name`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_symbol() {
        let input: DeriveInput = parse_quote! {
            #[unit(name = "meter", dimension = LengthD)]
            pub enum Meter {}
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `symbol`"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_dimension() {
        let input: DeriveInput = parse_quote! {
            #[unit(name = "meter", symbol = "m")]
            pub enum Meter {}
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("missing required attribute `dimension`"));
    }

    #[test]
    fn test_parse_unit_attribute_empty_symbol() {
        let tokens = quote! {
            name = "meter", symbol = "", dimension = LengthD
        };
        let err = syn::parse2::<UnitAttribute>(tokens).err().unwrap();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(name = "meter", symbol = "m", dimension = LengthD, ratio = 1.0)]
            pub enum Meter {}
        };

        let err = parse_unit_attribute(&input.attrs).err().unwrap();
        assert!(err.to_string().contains("unknown attribute `ratio`"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            name = "second", symbol = "s", dimension = TimeIntervalD,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "s");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(name = "meter", symbol = "m", dimension = LengthD)]
            pub enum Meter {}
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: NamedUnit for Meter"));
        assert!(code.contains("type Dim = LengthD"));
        assert!(code.contains("const NAME : & 'static str = \"meter\""));
        assert!(code.contains("const SYMBOL : & 'static str = \"m\""));
        assert!(code.contains("const FACTOR : crate :: Rep = 1.0"));
    }

    #[test]
    fn test_derive_unit_impl_constructors() {
        let input: DeriveInput = parse_quote! {
            #[unit(name = "gram", symbol = "g", dimension = MassD, factor = 1e-3)]
            pub enum Gram {}
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("const FACTOR : crate :: Rep = 1e-3"));
        assert!(code.contains("pub const fn kg (x : crate :: Rep) -> crate :: Quantity < MassD >"));
        assert!(code.contains("pub const fn g (x"));
        assert!(code.contains("pub const fn dag (x"));
        assert!(code.contains("crate :: units :: si :: KILO"));
        assert_eq!(code.matches("pub const fn").count(), 21);
    }

    #[test]
    fn test_derive_unit_impl_keyword_constructor() {
        let input: DeriveInput = parse_quote! {
            #[unit(name = "second", symbol = "s", dimension = TimeIntervalD)]
            pub enum Second {}
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("pub const fn r#as (x"));
        assert!(code.contains("pub const fn ms (x"));
    }

    #[test]
    fn test_constructor_ident() {
        assert_eq!(constructor_ident("km").to_string(), "km");
        assert_eq!(constructor_ident("as").to_string(), "r#as");
        assert_eq!(constructor_ident("kOhm").to_string(), "kOhm");
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub enum Meter {}
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
