//! # Transaction Messages
//!
//! The closed set of message kinds the gate understands. Value transfers get
//! typed variants; every other module message travels as [`CustomMsg`] with a
//! JSON field map.

use ic_01_identity_registry::{MsgCreateIdentity, MSG_CREATE_IDENTITY_TYPE_URL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Type URL of the single-transfer message.
pub const MSG_SEND_TYPE_URL: &str = "/bank.v1.MsgSend";

/// Type URL of the batch-transfer message.
pub const MSG_MULTI_SEND_TYPE_URL: &str = "/bank.v1.MsgMultiSend";

/// Conventional signer fields, in lookup priority.
pub const CONVENTIONAL_SIGNER_FIELDS: [&str; 3] = ["creator", "signer", "from_address"];

/// Amount of one denomination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// Transfer `amount` from one account to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    #[serde(default)]
    pub amount: Vec<Coin>,
}

impl MsgSend {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Vec<Coin>) -> Self {
        Self {
            from_address: from.into(),
            to_address: to.into(),
            amount,
        }
    }
}

/// Funding side of a batch transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub address: String,
    #[serde(default)]
    pub coins: Vec<Coin>,
}

/// Receiving side of a batch transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
    pub address: String,
    #[serde(default)]
    pub coins: Vec<Coin>,
}

impl Input {
    pub fn new(address: impl Into<String>, coins: Vec<Coin>) -> Self {
        Self {
            address: address.into(),
            coins,
        }
    }
}

impl Output {
    pub fn new(address: impl Into<String>, coins: Vec<Coin>) -> Self {
        Self {
            address: address.into(),
            coins,
        }
    }
}

/// Many-to-many transfer. Every input is a signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgMultiSend {
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
}

/// A module message the gate has no typed view of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomMsg {
    pub type_url: String,
    /// Signers the message declares for itself, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_signers: Option<Vec<String>>,
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl CustomMsg {
    pub fn new(type_url: impl Into<String>) -> Self {
        Self {
            type_url: type_url.into(),
            declared_signers: None,
            fields: BTreeMap::new(),
        }
    }

    /// Builder: set a field.
    pub fn with_field(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Builder: declare signers explicitly.
    pub fn with_signers<I, S>(mut self, signers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_signers = Some(signers.into_iter().map(Into::into).collect());
        self
    }

    /// Reinterpret the field map as a typed message.
    pub fn decode_fields<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let object: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value(serde_json::Value::Object(object))
    }
}

/// One message inside a transaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Send(MsgSend),
    MultiSend(MsgMultiSend),
    CreateIdentity(MsgCreateIdentity),
    Custom(CustomMsg),
}

impl Msg {
    pub fn type_url(&self) -> &str {
        match self {
            Msg::Send(_) => MSG_SEND_TYPE_URL,
            Msg::MultiSend(_) => MSG_MULTI_SEND_TYPE_URL,
            Msg::CreateIdentity(_) => MSG_CREATE_IDENTITY_TYPE_URL,
            Msg::Custom(custom) => &custom.type_url,
        }
    }

    /// Signers the message declares for itself. Only generic messages carry
    /// such a list; typed messages derive theirs from their shape.
    pub fn declared_signers(&self) -> Option<&[String]> {
        match self {
            Msg::Custom(custom) => custom.declared_signers.as_deref(),
            _ => None,
        }
    }

    /// Textual value of the field `name`, if the message has one.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        match (self, name) {
            (Msg::Send(send), "from_address") => Some(&send.from_address),
            (Msg::Send(send), "to_address") => Some(&send.to_address),
            (Msg::CreateIdentity(create), "creator") => Some(&create.creator),
            (Msg::Custom(custom), _) => custom.fields.get(name).and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

impl From<MsgSend> for Msg {
    fn from(msg: MsgSend) -> Self {
        Msg::Send(msg)
    }
}

impl From<MsgMultiSend> for Msg {
    fn from(msg: MsgMultiSend) -> Self {
        Msg::MultiSend(msg)
    }
}

impl From<MsgCreateIdentity> for Msg {
    fn from(msg: MsgCreateIdentity) -> Self {
        Msg::CreateIdentity(msg)
    }
}

impl From<CustomMsg> for Msg {
    fn from(msg: CustomMsg) -> Self {
        Msg::Custom(msg)
    }
}

/// An ordered list of messages admitted or rejected as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tx {
    pub msgs: Vec<Msg>,
}

impl Tx {
    pub fn new(msgs: Vec<Msg>) -> Self {
        Self { msgs }
    }

    pub fn single(msg: impl Into<Msg>) -> Self {
        Self {
            msgs: vec![msg.into()],
        }
    }

    pub fn msgs(&self) -> &[Msg] {
        &self.msgs
    }
}
