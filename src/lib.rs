// Copyright 2024 The p11check developers
// See LICENSE.txt file for terms

#![warn(missing_docs)]

//! This is p11check
//!
//! A conformance test harness for cryptographic modules exposing the
//! PKCS#11 standard API. The harness is a client of the module under
//! test: it generates asymmetric key pairs, drives the encrypt/decrypt
//! protocol, queries object attributes, and turns the returned status
//! codes and data into pass/fail verdicts. Module loading, slot and
//! token discovery, and session management are left to the embedding
//! test fixture.

pub mod interface;

pub mod attribute;
pub mod check;
pub mod config;
pub mod error;
pub mod keypair;
pub mod log;
pub mod module;
pub mod ops;

#[cfg(test)]
mod tests;
