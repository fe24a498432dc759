// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource catalog entries and the export whitelist.

pub mod descriptor;
pub mod whitelist;

pub use descriptor::{ResourceDescriptor, ResourcePath};
pub use whitelist::Whitelist;
