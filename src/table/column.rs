//! Column descriptors
//!
//! A [`ColumnDescriptor`] is the declarative record Tabulator expects for one
//! column. Only options that were actually supplied end up in the serialised
//! JSON; zero widths, empty strings and empty parameter maps count as "not
//! supplied" and are dropped.
//!
//! Option kinds (sorter, formatter, editor, ...) are closed enums. The
//! `*_named` setters accept the widget's string names and reject anything the
//! widget does not understand.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumString};

use crate::errors::{TableError, TableResult};

/// Built-in sort functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Sorter {
    String,
    Number,
    Alphanum,
    Boolean,
    Date,
    Time,
    Datetime,
    Array,
}

/// Built-in cell formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Formatter {
    Plaintext,
    Textarea,
    Html,
    Money,
    Image,
    Link,
    Datetime,
    Datetimediff,
    TickCross,
    Star,
    Progress,
    Color,
    ButtonTick,
    ButtonCross,
    Rownum,
    Handle,
}

/// Built-in cell editors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Editor {
    Input,
    Textarea,
    Number,
    Range,
    TickCross,
    Star,
    List,
    Date,
    Time,
    Datetime,
}

/// Header filter mode; `Enabled` lets the widget pick the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum HeaderFilter {
    #[strum(serialize = "true")]
    Enabled,
    Input,
    Number,
    List,
    TickCross,
}

impl Serialize for HeaderFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HeaderFilter::Enabled => serializer.serialize_bool(true),
            other => serializer.serialize_str(other.as_ref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Frozen {
    Left,
    Right,
}

/// Hover tooltip: the cell value, or fixed text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tooltip {
    Enabled,
    Text(String),
}

impl Serialize for Tooltip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Tooltip::Enabled => serializer.serialize_bool(true),
            Tooltip::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// One column of a Tabulator table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    field: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sorter: Option<Sorter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatter: Option<Formatter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatter_params: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    editor: Option<Editor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    editor_params: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_filter: Option<HeaderFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hoz_align: Option<HorizontalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vert_align: Option<VerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frozen: Option<Frozen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    css_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resizable: Option<bool>,
}

impl ColumnDescriptor {
    /// Column bound to `field`, titled with the title-cased field name
    pub fn new(field: impl Into<String>) -> Self {
        let field = field.into();
        let title = title_case(&field);
        Self {
            field,
            title,
            width: None,
            min_width: None,
            max_width: None,
            sorter: None,
            formatter: None,
            formatter_params: None,
            editor: None,
            editor_params: None,
            header_filter: None,
            hoz_align: None,
            vert_align: None,
            frozen: None,
            visible: None,
            css_class: None,
            tooltip: None,
            resizable: None,
        }
    }

    /// Column with an explicit header title; an empty title keeps the default
    pub fn titled(field: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(field).title(title)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn header_title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.is_empty() {
            self.title = title;
        }
        self
    }

    #[must_use]
    pub fn width(mut self, px: u32) -> Self {
        self.width = non_zero(px);
        self
    }

    #[must_use]
    pub fn min_width(mut self, px: u32) -> Self {
        self.min_width = non_zero(px);
        self
    }

    #[must_use]
    pub fn max_width(mut self, px: u32) -> Self {
        self.max_width = non_zero(px);
        self
    }

    #[must_use]
    pub fn sorter(mut self, sorter: Sorter) -> Self {
        self.sorter = Some(sorter);
        self
    }

    pub fn sorter_named(self, name: &str) -> TableResult<Self> {
        Ok(self.sorter(parse_named("sorter", name)?))
    }

    #[must_use]
    pub fn formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn formatter_named(self, name: &str) -> TableResult<Self> {
        Ok(self.formatter(parse_named("formatter", name)?))
    }

    #[must_use]
    pub fn formatter_params(mut self, params: Map<String, Value>) -> Self {
        self.formatter_params = non_empty_map(params);
        self
    }

    #[must_use]
    pub fn editor(mut self, editor: Editor) -> Self {
        self.editor = Some(editor);
        self
    }

    pub fn editor_named(self, name: &str) -> TableResult<Self> {
        Ok(self.editor(parse_named("editor", name)?))
    }

    #[must_use]
    pub fn editor_params(mut self, params: Map<String, Value>) -> Self {
        self.editor_params = non_empty_map(params);
        self
    }

    #[must_use]
    pub fn header_filter(mut self, filter: HeaderFilter) -> Self {
        self.header_filter = Some(filter);
        self
    }

    pub fn header_filter_named(self, name: &str) -> TableResult<Self> {
        Ok(self.header_filter(parse_named("header filter", name)?))
    }

    #[must_use]
    pub fn align(mut self, align: HorizontalAlign) -> Self {
        self.hoz_align = Some(align);
        self
    }

    pub fn align_named(self, name: &str) -> TableResult<Self> {
        Ok(self.align(parse_named("horizontal alignment", name)?))
    }

    #[must_use]
    pub fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vert_align = Some(align);
        self
    }

    pub fn vertical_align_named(self, name: &str) -> TableResult<Self> {
        Ok(self.vertical_align(parse_named("vertical alignment", name)?))
    }

    #[must_use]
    pub fn frozen(mut self, side: Frozen) -> Self {
        self.frozen = Some(side);
        self
    }

    pub fn frozen_named(self, name: &str) -> TableResult<Self> {
        Ok(self.frozen(parse_named("frozen side", name)?))
    }

    /// Columns are visible by default, so only `false` is emitted
    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = (!visible).then_some(false);
        self
    }

    #[must_use]
    pub fn css_class(mut self, class: impl Into<String>) -> Self {
        self.css_class = non_empty(class.into());
        self
    }

    #[must_use]
    pub fn tooltip(mut self, enabled: bool) -> Self {
        self.tooltip = enabled.then_some(Tooltip::Enabled);
        self
    }

    #[must_use]
    pub fn tooltip_text(mut self, text: impl Into<String>) -> Self {
        self.tooltip = non_empty(text.into()).map(Tooltip::Text);
        self
    }

    /// Columns are resizable by default, so only `false` is emitted
    #[must_use]
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = (!resizable).then_some(false);
        self
    }
}

/// Title-case a field name: the first letter of every alphabetic run is
/// upper-cased and the rest lower-cased (`start_time` becomes `Start_Time`)
pub fn title_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut previous_is_letter = false;
    for ch in field.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(ch);
            previous_is_letter = false;
        }
    }
    out
}

fn parse_named<T: FromStr>(kind: &str, name: &str) -> TableResult<T> {
    name.parse::<T>()
        .map_err(|_| TableError::unsupported(kind, name))
}

fn non_zero(px: u32) -> Option<u32> {
    (px > 0).then_some(px)
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn non_empty_map(params: Map<String, Value>) -> Option<Map<String, Value>> {
    (!params.is_empty()).then_some(params)
}
