// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files. The bundled ones are embedded in the
//! binary; an extra directory given with `--i18n-dir` can add locales or
//! replace bundled ones.
//!
//! Locale resolution order: CLI `--lang`, then `[general] language` from the
//! config, then the OS locale, then `en-US`.

pub mod fluent;
