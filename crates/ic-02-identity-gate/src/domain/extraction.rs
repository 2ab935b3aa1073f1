//! # Address Extraction
//!
//! Resolves the ordered signers and recipients of one message. Pure: never
//! consults the registry.
//!
//! ## Signer priority (first success wins)
//!
//! 1. Signers the message declares for itself, verbatim.
//! 2. Single transfer: `[from_address]`.
//! 3. Batch transfer: every input address, in order, duplicates kept.
//! 4. First non-empty textual field among `creator`, `signer`, `from_address`.
//!
//! Recipients exist only for transfers. Signers and recipients are resolved
//! independently, so callers can check one side before decoding the other.

use crate::domain::errors::GateError;
use crate::domain::messages::{
    CustomMsg, Msg, MsgMultiSend, MsgSend, CONVENTIONAL_SIGNER_FIELDS, MSG_MULTI_SEND_TYPE_URL,
    MSG_SEND_TYPE_URL,
};
use shared_types::Address;
use std::borrow::Cow;

/// Addresses one message touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub signers: Vec<Address>,
    pub recipients: Vec<Address>,
}

/// Decode a raw address string into its normalized form.
pub fn parse_address(raw: &str) -> Result<Address, GateError> {
    raw.parse::<Address>().map_err(|_| GateError::InvalidAddress {
        raw: raw.to_string(),
    })
}

fn parse_all<'a, I>(raws: I) -> Result<Vec<Address>, GateError>
where
    I: IntoIterator<Item = &'a str>,
{
    raws.into_iter().map(parse_address).collect()
}

/// Shape-aware address resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Signers and recipients of `msg`.
    ///
    /// An empty signer list is not an error here; the gate decides what it
    /// means.
    pub fn extract(&self, msg: &Msg) -> Result<ExtractionResult, GateError> {
        Ok(ExtractionResult {
            signers: self.signers(msg)?,
            recipients: self.recipients(msg)?,
        })
    }

    /// Signers only.
    pub fn signers(&self, msg: &Msg) -> Result<Vec<Address>, GateError> {
        parse_all(self.raw_signers(msg)?.iter().map(String::as_str))
    }

    /// Recipients only.
    pub fn recipients(&self, msg: &Msg) -> Result<Vec<Address>, GateError> {
        parse_all(self.raw_recipients(msg)?.iter().map(String::as_str))
    }

    /// Signer strings in resolution order, not yet decoded.
    ///
    /// Never touches recipient fields, so a bad recipient cannot fail it.
    pub fn raw_signers(&self, msg: &Msg) -> Result<Vec<String>, GateError> {
        if let Some(declared) = msg.declared_signers().filter(|d| !d.is_empty()) {
            return Ok(declared.to_vec());
        }

        let shaped = transfer_view(msg)?;
        let signers = match &*shaped {
            Msg::Send(send) => vec![send.from_address.clone()],
            Msg::MultiSend(multi) => multi.inputs.iter().map(|i| i.address.clone()).collect(),
            other => CONVENTIONAL_SIGNER_FIELDS
                .iter()
                .find_map(|field| other.text_field(field).filter(|raw| !raw.is_empty()))
                .map(|raw| vec![raw.to_string()])
                .unwrap_or_default(),
        };
        Ok(signers)
    }

    /// Recipient strings in message order, not yet decoded.
    pub fn raw_recipients(&self, msg: &Msg) -> Result<Vec<String>, GateError> {
        let shaped = transfer_view(msg)?;
        let recipients = match &*shaped {
            Msg::Send(send) => vec![send.to_address.clone()],
            Msg::MultiSend(multi) => multi.outputs.iter().map(|o| o.address.clone()).collect(),
            _ => Vec::new(),
        };
        Ok(recipients)
    }
}

/// A generic message carrying a transfer type URL is viewed through the typed
/// transfer shape, so its recipients cannot slip past the gate.
fn transfer_view(msg: &Msg) -> Result<Cow<'_, Msg>, GateError> {
    let Msg::Custom(custom) = msg else {
        return Ok(Cow::Borrowed(msg));
    };

    let typed = match custom.type_url.as_str() {
        MSG_SEND_TYPE_URL => Msg::Send(decode::<MsgSend>(custom)?),
        MSG_MULTI_SEND_TYPE_URL => Msg::MultiSend(decode::<MsgMultiSend>(custom)?),
        _ => return Ok(Cow::Borrowed(msg)),
    };
    Ok(Cow::Owned(typed))
}

fn decode<T: serde::de::DeserializeOwned>(custom: &CustomMsg) -> Result<T, GateError> {
    custom
        .decode_fields()
        .map_err(|e| GateError::MalformedTransfer {
            type_url: custom.type_url.clone(),
            reason: e.to_string(),
        })
}
