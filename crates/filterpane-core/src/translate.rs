//! Label translation
//!
//! Schemas call [`Translate::translate`] once per static label when they are
//! built, never per render.

use std::collections::HashMap;

/// Resolves a source label to its display text
pub trait Translate {
    fn translate(&self, text: &str) -> String;
}

/// Returns every label unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Message catalog loaded from configuration; unknown labels pass through
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for Catalog {
    fn translate(&self, text: &str) -> String {
        match self.entries.get(text) {
            Some(translated) if !translated.is_empty() => translated.clone(),
            _ => text.to_string(),
        }
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}
