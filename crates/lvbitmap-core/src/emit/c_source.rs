//! C source rendering of encoded images.

use super::{EmitError, BYTES_PER_LINE};
use crate::encode::{ColorFormat, EncodedImage, Palette};

const RULE_OPEN: &str =
    "/*******************************************************************************";
const RULE_CLOSE: &str =
    " *******************************************************************************/";

/// Render an encoded image as a C source file for the LVGL image API.
///
/// The output contains the include guard block, an optional palette array,
/// the `<name>_map` byte array (16 hex bytes per line, no trailing comma)
/// and the `lv_img_dsc_t <name>` descriptor.
///
/// # Errors
///
/// Returns `EmitError::InvalidIdentifier` if `name` is not a C identifier.
pub fn emit_array_literal(image: &EncodedImage, name: &str) -> Result<String, EmitError> {
    validate_identifier(name)?;

    let header = &image.header;
    let attribute = attribute_macro(name);

    let mut out = String::new();
    out.push_str(&banner(image));
    out.push('\n');
    out.push_str(&include_block(&attribute));
    out.push('\n');

    if let Some(palette) = &image.palette {
        out.push_str(&palette_block(name, palette));
        out.push('\n');
        out.push_str("// Pixel data: 1 bit per pixel (0=transparent, 1=white)\n");
    }

    out.push_str(&format!(
        "const LV_ATTRIBUTE_MEM_ALIGN LV_ATTRIBUTE_LARGE_CONST {attribute} uint8_t {name}_map[] = {{\n"
    ));
    out.push_str(&format_hex_rows(&image.data));
    out.push_str("\n};\n\n");

    let data_size = match &image.palette {
        Some(_) => format!("sizeof({name}_map) + sizeof({name}_palette)"),
        None => header.data_size.to_string(),
    };

    out.push_str(&format!("const lv_img_dsc_t {name} = {{\n"));
    out.push_str(&format!("  .header.cf = {},\n", header.color_format.lv_constant()));
    out.push_str("  .header.always_zero = 0,\n");
    out.push_str("  .header.reserved = 0,\n");
    out.push_str(&format!("  .header.w = {},\n", header.width));
    out.push_str(&format!("  .header.h = {},\n", header.height));
    out.push_str(&format!("  .data_size = {data_size},\n"));
    out.push_str(&format!("  .data = {name}_map,\n"));
    out.push_str("};\n");

    Ok(out)
}

/// Render the companion header declaring the descriptor.
pub fn emit_declaration_header(name: &str) -> Result<String, EmitError> {
    validate_identifier(name)?;

    let guard = format!("{}_H", name.to_ascii_uppercase());
    let mut out = String::new();
    out.push_str(&format!("#ifndef {guard}\n#define {guard}\n\n"));
    out.push_str(&include_block(&attribute_macro(name)));
    out.push_str(&format!("\nLV_IMG_DECLARE({name});\n\n#endif /* {guard} */\n"));
    Ok(out)
}

/// Format bytes as `0x..` literals, 16 per line, two-space indent, without
/// a separator after the final element.
pub fn format_hex_rows(bytes: &[u8]) -> String {
    let rows: Vec<String> = bytes
        .chunks(BYTES_PER_LINE)
        .map(|chunk| {
            let cells: Vec<String> = chunk.iter().map(|b| format!("0x{b:02x}")).collect();
            format!("  {},", cells.join(", "))
        })
        .collect();

    let mut text = rows.join("\n");
    if text.ends_with(',') {
        text.pop();
    }
    text
}

/// Check that `name` can be used as a C identifier.
pub fn validate_identifier(name: &str) -> Result<(), EmitError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(EmitError::InvalidIdentifier(name.to_string()))
    }
}

fn attribute_macro(name: &str) -> String {
    format!("LV_ATTRIBUTE_IMG_{}", name.to_ascii_uppercase())
}

fn banner(image: &EncodedImage) -> String {
    let header = &image.header;
    let (title, format_line) = match header.color_format {
        ColorFormat::Alpha8Bit => (
            "Size",
            " * Bit depth: ALPHA_8BIT (alpha-only, for recoloring)",
        ),
        ColorFormat::Indexed1Bit => (
            "Snowflake image",
            " * Format: Indexed 1-bit with 2-color palette",
        ),
    };
    format!(
        "{RULE_OPEN}\n * {title}: {} x {} px\n{format_line}\n{RULE_CLOSE}\n",
        header.width, header.height
    )
}

fn include_block(attribute: &str) -> String {
    format!(
        r#"#ifdef __has_include
    #if __has_include("lvgl.h")
        #ifndef LV_LVGL_H_INCLUDE_SIMPLE
            #define LV_LVGL_H_INCLUDE_SIMPLE
        #endif
    #endif
#endif

#if defined(LV_LVGL_H_INCLUDE_SIMPLE)
    #include "lvgl.h"
#else
    #include "lvgl/lvgl.h"
#endif

#ifndef LV_ATTRIBUTE_MEM_ALIGN
#define LV_ATTRIBUTE_MEM_ALIGN
#endif

#ifndef {attribute}
#define {attribute}
#endif
"#
    )
}

fn palette_block(name: &str, palette: &Palette) -> String {
    let summary = if *palette == Palette::monochrome() {
        " (transparent black, white)"
    } else {
        ""
    };
    let mut out = format!(
        "// Palette: {} colors{summary}\nconst LV_ATTRIBUTE_MEM_ALIGN lv_color_t {name}_palette[] = {{\n",
        palette.len()
    );
    for (index, color) in palette.colors.iter().enumerate() {
        let [r, g, b] = *color;
        let label = match color_label(index, *color) {
            Some(label) => format!(": {label}"),
            None => String::new(),
        };
        out.push_str(&format!(
            "  LV_COLOR_MAKE(0x{r:02x}, 0x{g:02x}, 0x{b:02x}),  // Index {index}{label}\n"
        ));
    }
    out.push_str("};\n");
    out
}

/// Index 0 is rendered transparent by the indexed formats.
fn color_label(index: usize, color: [u8; 3]) -> Option<&'static str> {
    match (index, color) {
        (0, [0x00, 0x00, 0x00]) => Some("Black (will be transparent)"),
        (_, [0x00, 0x00, 0x00]) => Some("Black"),
        (_, [0xff, 0xff, 0xff]) => Some("White"),
        _ => None,
    }
}
