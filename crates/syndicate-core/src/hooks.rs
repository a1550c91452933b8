//! Extension points registered by a deployment.
//!
//! Hooks run in registration order. For defaults this means the last
//! registered hook has the final word; for output replacement the first hook
//! that returns a fragment wins.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::attributes::AttributeSet;
use crate::menu::MenuItem;
use crate::request::RequestConfig;

/// Rewrites the base attribute defaults before surface defaults are applied.
pub trait DefaultsHook: Send + Sync {
    fn apply(&self, defaults: &mut AttributeSet);
}

impl<F> DefaultsHook for F
where
    F: Fn(&mut AttributeSet) + Send + Sync,
{
    fn apply(&self, defaults: &mut AttributeSet) {
        self(defaults)
    }
}

/// Rewrites one normalized item before it is appended to the result.
///
/// Receives the raw upstream record as well, so deployments can lift extra
/// fields the canonical [`MenuItem`] does not carry.
pub trait ItemHook: Send + Sync {
    fn rewrite(&self, item: MenuItem, raw: &Value) -> MenuItem;
}

impl<F> ItemHook for F
where
    F: Fn(MenuItem, &Value) -> MenuItem + Send + Sync,
{
    fn rewrite(&self, item: MenuItem, raw: &Value) -> MenuItem {
        self(item, raw)
    }
}

/// Replaces or post-processes a rendered fragment.
pub trait OutputHook: Send + Sync {
    /// Returns a complete fragment to use instead of the built-in template.
    fn replace(&self, _items: &[MenuItem], _config: &RequestConfig) -> Option<String> {
        None
    }

    /// Rewrites the final fragment, whichever template produced it.
    fn filter(&self, content: String, _config: &RequestConfig) -> String {
        content
    }
}

/// Registry of every hook kind.
#[derive(Clone, Default)]
pub struct Hooks {
    defaults: Vec<Arc<dyn DefaultsHook>>,
    items: Vec<Arc<dyn ItemHook>>,
    output: Vec<Arc<dyn OutputHook>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a defaults hook.
    pub fn on_defaults(mut self, hook: impl DefaultsHook + 'static) -> Self {
        self.defaults.push(Arc::new(hook));
        self
    }

    /// Registers an item hook.
    pub fn on_item(mut self, hook: impl ItemHook + 'static) -> Self {
        self.items.push(Arc::new(hook));
        self
    }

    /// Registers an output hook.
    pub fn on_output(mut self, hook: impl OutputHook + 'static) -> Self {
        self.output.push(Arc::new(hook));
        self
    }

    pub fn apply_defaults(&self, defaults: &mut AttributeSet) {
        for hook in &self.defaults {
            hook.apply(defaults);
        }
    }

    pub fn rewrite_item(&self, item: MenuItem, raw: &Value) -> MenuItem {
        self.items
            .iter()
            .fold(item, |item, hook| hook.rewrite(item, raw))
    }

    /// Returns the first replacement offered by an output hook.
    pub fn replace_output(&self, items: &[MenuItem], config: &RequestConfig) -> Option<String> {
        self.output
            .iter()
            .find_map(|hook| hook.replace(items, config))
    }

    pub fn filter_output(&self, content: String, config: &RequestConfig) -> String {
        self.output
            .iter()
            .fold(content, |content, hook| hook.filter(content, config))
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty() && self.items.is_empty() && self.output.is_empty()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("defaults", &self.defaults.len())
            .field("items", &self.items.len())
            .field("output", &self.output.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_last_registrant_wins() {
        let hooks = Hooks::new()
            .on_defaults(|d: &mut AttributeSet| d.insert("host", "first.example.edu"))
            .on_defaults(|d: &mut AttributeSet| d.insert("host", "second.example.edu"));

        let mut defaults = AttributeSet::new();
        hooks.apply_defaults(&mut defaults);

        assert_eq!(defaults.get("host"), Some("second.example.edu"));
    }

    #[test]
    fn test_item_hooks_chain() {
        let hooks = Hooks::new()
            .on_item(|mut item: MenuItem, _raw: &Value| {
                item.food_name.push_str(" (A)");
                item
            })
            .on_item(|mut item: MenuItem, _raw: &Value| {
                item.food_name.push_str(" (B)");
                item
            });

        let item = MenuItem {
            food_name: "Soup".into(),
            ..MenuItem::default()
        };

        let rewritten = hooks.rewrite_item(item, &Value::Null);
        assert_eq!(rewritten.food_name, "Soup (A) (B)");
    }

    #[test]
    fn test_empty_registry() {
        assert!(Hooks::new().is_empty());
        assert!(!Hooks::new().on_defaults(|_: &mut AttributeSet| {}).is_empty());
    }
}
