// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::ExtractMode;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

/// 解析CSS选择器，无效时记录警告并返回 `None`
pub fn parse_selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!(selector = css, error = %e, "Invalid CSS selector");
            None
        }
    }
}

/// 把若干文本片段整理为非空行，行内空白折叠为单个空格
pub fn clean_lines<'a, I>(pieces: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    pieces
        .into_iter()
        .flat_map(|piece| piece.split('\n'))
        .map(|line| WHITESPACE.replace_all(line.trim(), " ").into_owned())
        .filter(|line| !line.is_empty())
        .collect()
}

/// 元素内每个文本节点整理后的行
pub fn element_lines(element: ElementRef<'_>) -> Vec<String> {
    clean_lines(element.text())
}

/// 元素文本，多行以空格连接
pub fn element_text(element: ElementRef<'_>) -> String {
    element_lines(element).join(" ")
}

/// 按提取方式把文本行渲染为字段值
pub fn render_lines(lines: &[String], mode: ExtractMode) -> Option<String> {
    let value = match mode {
        ExtractMode::FirstLine => lines.first().cloned().unwrap_or_default(),
        ExtractMode::Text | ExtractMode::Link => lines.join(" "),
    };
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// 对单个元素按提取方式取值
pub fn read_element(element: ElementRef<'_>, mode: ExtractMode) -> Option<String> {
    match mode {
        ExtractMode::Link => element
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .map(str::to_string),
        _ => render_lines(&element_lines(element), mode),
    }
}

/// 在文档中取第一个匹配元素的值
pub fn select_field(html: &Html, css: &str, mode: ExtractMode) -> Option<String> {
    let selector = parse_selector(css)?;
    let element = html.select(&selector).next()?;
    read_element(element, mode)
}
