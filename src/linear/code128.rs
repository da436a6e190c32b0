//! Code 128 encoding via the barcoders crate.
//!
//! Code 128 needs a starting character set:
//! - Set B (`Ɓ`): printable ASCII, used for general content
//! - Set C (`Ć`): digit pairs, used when the content is an even run of digits

use barcoders::sym::code128::Code128;
use tracing::debug;

use super::LinearBarString;
use crate::error::EncodeError;
use crate::symbology::Symbology;

const SET_B: char = '\u{0181}';
const SET_C: char = '\u{0106}';

pub(super) fn encode(content: &str) -> Result<LinearBarString, EncodeError> {
    if content.is_empty() {
        return Err(EncodeError::EmptyContent);
    }
    // barcoders reads its set-switch characters anywhere in the input
    if !content.is_ascii() {
        return Err(EncodeError::Generator {
            symbology: Symbology::Code128,
            reason: "only ASCII content is supported".to_string(),
        });
    }

    let set = if is_digit_pairs(content) { SET_C } else { SET_B };
    let prefixed = format!("{}{}", set, content);

    let barcode = Code128::new(&prefixed).map_err(|e| EncodeError::Generator {
        symbology: Symbology::Code128,
        reason: format!("{:?}", e),
    })?;
    let modules = barcode.encode();

    debug!(modules = modules.len(), set_c = set == SET_C, "encoded Code 128");
    Ok(LinearBarString::from_modules(&modules))
}

fn is_digit_pairs(content: &str) -> bool {
    content.len() >= 4 && content.len() % 2 == 0 && content.bytes().all(|b| b.is_ascii_digit())
}
