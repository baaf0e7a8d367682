//! Prompt construction from YAML templates
//!
//! A template is a loose bag of optional sections. Only `instruction` is
//! required; every other field is rendered as its own section when present.

use serde::Deserialize;
use std::fmt::Write;
use thiserror::Error;

/// One role's prompt template as it appears in the prompt catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PromptTemplate {
    pub role: Option<String>,
    pub instruction: String,
    pub context: Option<String>,
    pub output_constraints: Vec<String>,
    pub style_or_tone: Vec<String>,
    pub output_format: Vec<String>,
    pub goal: Option<String>,
    pub examples: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Prompt template is missing an instruction")]
    MissingInstruction,
}

/// Render a template, appending `input_data` as a delimited input section
/// when it is not empty.
pub fn build_prompt(template: &PromptTemplate, input_data: &str) -> Result<String, PromptError> {
    let instruction = template.instruction.trim();
    if instruction.is_empty() {
        return Err(PromptError::MissingInstruction);
    }

    let mut sections = Vec::new();

    if let Some(role) = non_empty(template.role.as_deref()) {
        sections.push(format!("You are {role}."));
    }

    sections.push(instruction.to_string());

    if let Some(context) = non_empty(template.context.as_deref()) {
        sections.push(format!("## Context\n{context}"));
    }

    push_list(&mut sections, "Output Constraints", &template.output_constraints);
    push_list(&mut sections, "Style and Tone", &template.style_or_tone);
    push_list(&mut sections, "Output Format", &template.output_format);

    if let Some(goal) = non_empty(template.goal.as_deref()) {
        sections.push(format!("## Goal\n{goal}"));
    }

    push_list(&mut sections, "Examples", &template.examples);

    let input = input_data.trim();
    if !input.is_empty() {
        sections.push(format!(
            "## Input\n<<<BEGIN CONTENT>>>\n```\n{input}\n```\n<<<END CONTENT>>>"
        ));
    }

    Ok(sections.join("\n\n"))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn push_list(sections: &mut Vec<String>, title: &str, items: &[String]) {
    let mut body = String::new();
    for item in items.iter().map(|i| i.trim()).filter(|i| !i.is_empty()) {
        let _ = writeln!(body, "- {item}");
    }
    if !body.is_empty() {
        sections.push(format!("## {title}\n{}", body.trim_end()));
    }
}
