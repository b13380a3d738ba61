// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod build;
pub mod jsonld;
pub mod list;
pub mod metadata;
pub mod show;

pub use build::build_command;
pub use jsonld::jsonld_command;
pub use list::list_command;
pub use metadata::metadata_command;
pub use show::show_command;
