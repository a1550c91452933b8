//! Rendering of normalized menu items into HTML/JS fragments.
//!
//! Every mode is a terminal template selected by
//! [`OutputMode`](syndicate_core::OutputMode). HTML modes share one
//! filtering pass ([`select`]); `json` bypasses it and embeds the whole
//! sequence.

mod cards;
mod excerpt;
mod headline;
pub mod html;
mod json;
mod list;

use chrono::{Local, NaiveDate};
use syndicate_core::{DateRangeFormatter, Hooks, MenuItem, OutputMode, RequestConfig};
use tracing::debug;

/// Notice for a successful answer with no items.
pub const NO_ITEMS_NOTICE: &str = "No items available";
/// Notice when the category filter removed every item.
pub const NO_MATCH_NOTICE: &str = "No items match";

/// Renders cached payloads. Never fails: every path yields a string.
#[derive(Debug, Clone, Default)]
pub struct RenderEngine {
    hooks: Hooks,
}

impl RenderEngine {
    pub fn new(hooks: Hooks) -> Self {
        Self { hooks }
    }

    /// Renders a payload; `None` is a cached feed failure.
    pub fn render(&self, payload: Option<&[MenuItem]>, config: &RequestConfig) -> String {
        self.render_on(payload, config, Local::now().date_naive())
    }

    /// Like [`Self::render`] with an explicit "today" for date shortcuts.
    pub fn render_on(
        &self,
        payload: Option<&[MenuItem]>,
        config: &RequestConfig,
        today: NaiveDate,
    ) -> String {
        let content = match payload {
            None => html::comment("the menu feed is currently unavailable"),
            Some(items) => self
                .hooks
                .replace_output(items, config)
                .unwrap_or_else(|| render_items(items, config, today)),
        };

        self.hooks.filter_output(content, config)
    }
}

type Template = fn(&[&MenuItem], &RequestConfig, &DateRangeFormatter) -> String;

/// Renders a payload with no hooks.
pub fn render_items(items: &[MenuItem], config: &RequestConfig, today: NaiveDate) -> String {
    let mode = config.output();
    debug!(mode = %mode, items = items.len(), "Rendering items");

    let template: Template = match mode {
        OutputMode::Json => return json::render(items, config),
        OutputMode::List | OutputMode::Full => list::render,
        OutputMode::Headline => headline::render,
        OutputMode::Excerpt => excerpt::render,
        OutputMode::Cards => cards::render,
    };

    let dates = DateRangeFormatter::new(config.date_format(), config.time_format()).with_today(today);
    let body = match select(items, config) {
        Selection::NoItems => notice(NO_ITEMS_NOTICE),
        Selection::NoMatch => notice(NO_MATCH_NOTICE),
        Selection::Items(selected) => template(&selected, config, &dates),
    };

    wrap(mode, config, &body)
}

/// Outcome of the shared filtering pass.
#[derive(Debug, PartialEq)]
pub enum Selection<'a> {
    /// The payload itself was empty.
    NoItems,
    /// Items existed but none survived the filters.
    NoMatch,
    Items(Vec<&'a MenuItem>),
}

/// Applies `offset`, then the list/full filters, then `count`.
///
/// List and full also drop rows without a FoodID unless they are events.
pub fn select<'a>(items: &'a [MenuItem], config: &RequestConfig) -> Selection<'a> {
    if items.is_empty() {
        return Selection::NoItems;
    }

    let listing = config.output().filters_by_category();
    let category = config.category().filter(|_| listing);

    let limit = config.count().map_or(usize::MAX, |c| c as usize);
    let selected: Vec<&MenuItem> = items
        .iter()
        .skip(config.offset())
        .filter(|item| !listing || !item.food_id.is_empty() || item.is_event())
        .filter(|item| category.is_none_or(|c| item.category_id == c))
        .take(limit)
        .collect();

    if selected.is_empty() {
        Selection::NoMatch
    } else {
        Selection::Items(selected)
    }
}

fn notice(message: &str) -> String {
    format!("<p class=\"syndicate-notice\">{message}</p>")
}

fn wrap(mode: OutputMode, config: &RequestConfig, body: &str) -> String {
    let scheme = if config.scheme().is_local() {
        " data-scheme=\"local\""
    } else {
        ""
    };
    format!(
        "<!-- syndicate output: {mode} -->\n\
         <div class=\"syndicate-wrapper syndicate-{mode}\" data-surface=\"{}\" data-location=\"{}\"{scheme}>\n\
         {body}\n\
         </div>",
        html::text(config.surface()),
        html::text(config.location_id()),
    )
}

/// Event date markup, empty for items without a start.
fn event_dates(item: &MenuItem, dates: &DateRangeFormatter) -> String {
    if item.event_begin.is_none() {
        return String::new();
    }
    let location = item
        .event_address
        .as_deref()
        .map(|a| format!("<span class=\"event_location\">{}</span>", html::text(a)))
        .unwrap_or_default();
    format!(
        "<small>{}{location}</small>",
        dates.format(item.event_begin, item.event_end.or(item.event_begin))
    )
}
