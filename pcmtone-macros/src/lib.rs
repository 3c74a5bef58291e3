use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Creates a signed `PcmFormat` at compile time from a string literal.
///
/// The literal is validated while compiling, so an unsupported bit depth or
/// encoding is a compile error rather than a runtime `Result`. The expansion
/// only calls `const fn`s and can initialize constants.
///
/// # Format
///
/// The format is: `[s]<bits>[le|be]` where:
/// - `s` optionally marks signed PCM (the only supported encoding)
/// - `bits` is the bit depth, 1 to 64
/// - `le` or `be` selects the byte order, defaulting to little-endian
///
/// # Examples
///
/// ```ignore
/// use pcmtone::pcm_format;
///
/// // CD audio
/// let cd = pcm_format!("s16le");
///
/// // Big-endian 24-bit, as stored in AIFF
/// let aiff = pcm_format!("s24be");
///
/// // Byte order defaults to little-endian
/// const WIDE: pcmtone::PcmFormat = pcm_format!("64");
/// ```
#[proc_macro]
pub fn pcm_format(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let format_str = input.value();

    match parse_format(&format_str) {
        Ok((bits, endianness)) => {
            let endianness = match endianness {
                ByteOrder::Little => quote! { pcmtone::Endianness::Little },
                ByteOrder::Big => quote! { pcmtone::Endianness::Big },
            };

            let expanded = quote! {
                pcmtone::PcmFormat::signed(
                    pcmtone::BitDepth::new_unchecked(#bits),
                    #endianness,
                )
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid PCM format '{}': {}", format_str, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

fn parse_byte_order(s: &str) -> Result<ByteOrder, String> {
    match s {
        "" | "le" => Ok(ByteOrder::Little),
        "be" => Ok(ByteOrder::Big),
        _ => Err(format!("invalid byte order '{}' (expected 'le' or 'be')", s)),
    }
}

fn parse_format(s: &str) -> Result<(u8, ByteOrder), String> {
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let s = s.to_lowercase();
    let rest = match s.chars().next() {
        Some('s') => &s[1..],
        Some('u') => return Err("unsigned PCM is not supported".to_string()),
        Some('f') => return Err("floating-point PCM is not supported".to_string()),
        _ => s.as_str(),
    };

    // Find where the byte order suffix starts
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    if digits_end == 0 {
        return Err("missing bit depth".to_string());
    }

    let (bits_str, order_str) = rest.split_at(digits_end);
    let bits = bits_str
        .parse::<u8>()
        .map_err(|_| format!("invalid bit depth '{}'", bits_str))?;

    if !(1..=64).contains(&bits) {
        return Err(format!("bit depth {} out of range (1 to 64)", bits));
    }

    let order = parse_byte_order(order_str)?;
    Ok((bits, order))
}
