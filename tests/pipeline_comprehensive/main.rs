//! Comprehensive pipeline test suite
//!
//! Verifies the tokenization core end-to-end through the public facade:
//!
//! - **partitioning**: word-set enumeration contracts (completeness, cap,
//!   ordering, pruning) exercised through the public API
//! - **backend_contract**: behavior both tokenizer backends must share
//!   (status checks, standardization, special terms)
//! - **extraction**: full extract_tokens scenarios, fallback heuristics,
//!   determinism
//!
//! ## Running
//!
//! ```bash
//! cargo test --test pipeline_comprehensive
//! ```

mod test_utils;

mod extraction;
mod partitioning;
