//! Canonical transaction encoding and signing.
//!
//! The node verifies signatures against the exact byte encoding of
//! `(message, chain id, sequence)`, so the sign doc and the envelope are
//! serialized with a fixed field order; the same logical input always
//! produces the same bytes. Private keys are used in-process for a single
//! signing operation and never logged or stored.

use ed25519_dalek::{Signature, Signer, SigningKey, VerifyingKey};
use serde::Serialize;

use crate::broadcast::msgs::Msg;
use crate::error::{ClientError, ClientResult};

/// Signable payload: the message bound to a chain and a sequence number.
#[derive(Serialize)]
struct SignDoc<'a> {
    chain_id: &'a str,
    msg: &'a Msg,
    sequence: u64,
}

/// Transaction envelope submitted to the node. Single-use: bound to one
/// sequence number and never mutated after signing.
#[derive(Serialize)]
struct Envelope<'a> {
    msg: &'a Msg,
    public_key: String,
    signature: String,
    sequence: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    memo: Option<&'a str>,
}

/// Parse a hex-encoded ed25519 private key.
pub fn parse_priv_key(priv_key_hex: &str) -> ClientResult<SigningKey> {
    let bytes = decode_key_hex(priv_key_hex)?;
    Ok(SigningKey::from_bytes(&bytes))
}

/// Parse a hex-encoded ed25519 public key.
pub fn parse_pub_key(pub_key_hex: &str) -> ClientResult<VerifyingKey> {
    let bytes = decode_key_hex(pub_key_hex)?;
    VerifyingKey::from_bytes(&bytes).map_err(|e| ClientError::KeyDecodeError {
        cause: format!("not a valid ed25519 key: {e}"),
    })
}

fn decode_key_hex(key_hex: &str) -> ClientResult<[u8; 32]> {
    let key_hex = key_hex.strip_prefix("0x").unwrap_or(key_hex);
    let bytes = hex::decode(key_hex).map_err(|e| ClientError::KeyDecodeError {
        cause: format!("invalid hex: {e}"),
    })?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ClientError::KeyDecodeError {
            cause: format!("expected 32 key bytes, got {}", bytes.len()),
        })
}

/// Deterministically encode the signable payload.
pub fn encode_sign_doc(msg: &Msg, chain_id: &str, sequence: u64) -> ClientResult<Vec<u8>> {
    let doc = SignDoc {
        chain_id,
        msg,
        sequence,
    };
    serde_json::to_vec(&doc).map_err(|e| ClientError::ProtocolError {
        detail: format!("failed to encode sign doc: {e}"),
    })
}

/// Sign the canonical payload and assemble the transaction envelope.
pub fn encode_tx(
    msg: &Msg,
    signing_key: &SigningKey,
    signature: &Signature,
    sequence: u64,
    memo: &str,
) -> ClientResult<Vec<u8>> {
    let envelope = Envelope {
        msg,
        public_key: hex::encode(signing_key.verifying_key().to_bytes()),
        signature: hex::encode(signature.to_bytes()),
        sequence,
        memo: if memo.is_empty() { None } else { Some(memo) },
    };
    serde_json::to_vec(&envelope).map_err(|e| ClientError::ProtocolError {
        detail: format!("failed to encode transaction envelope: {e}"),
    })
}

/// Produce the signature over the canonical sign-doc bytes.
pub fn sign(sign_doc: &[u8], key: &SigningKey) -> Signature {
    key.sign(sign_doc)
}
