//! Explicit per-request session context.
//!
//! The original surface kept language and page selection in framework
//! session state; here the context is built once per request and passed
//! into every component call instead.

use serde::{Deserialize, Serialize};

use crate::i18n::{Catalog, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppPage {
    Home,
    Predict,
    About,
}

#[derive(Debug, Clone, Copy)]
pub struct SessionContext {
    pub locale: Locale,
    pub page: AppPage,
}

impl SessionContext {
    pub fn new(locale: Locale, page: AppPage) -> Self {
        Self { locale, page }
    }

    /// Build a context from a raw `lang` query parameter.
    pub fn from_lang(lang: Option<&str>, page: AppPage) -> Self {
        Self {
            locale: Locale::from_param(lang),
            page,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.locale.catalog()
    }
}
