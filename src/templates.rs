//! Template catalog for installed files
//!
//! Templates are addressed by [`TemplateId`] and loaded through the
//! [`TemplateStore`] trait so the planner can resolve every file's content
//! up front. A store that cannot produce a required template aborts the
//! whole run before anything is written.

use crate::error::Result;
use crate::platform::Platform;

/// Logical names for the files the installer materializes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Root `groundwork.json` directives file
    Directives,
    /// Platform rule file at the project root
    Rules(Platform),
    /// `.groundwork/PRINCIPLES.md`
    Principles,
    /// `.groundwork/WORKFLOW.md`
    Workflow,
}

impl TemplateId {
    /// Human-readable name used in error reporting
    #[allow(dead_code)]
    pub fn name(&self) -> String {
        match self {
            TemplateId::Directives => "directives".to_string(),
            TemplateId::Rules(platform) => format!("rules ({platform})"),
            TemplateId::Principles => "principles".to_string(),
            TemplateId::Workflow => "workflow".to_string(),
        }
    }
}

/// Source of template content, keyed by logical name
pub trait TemplateStore {
    /// Load the full content for a template
    fn load(&self, id: TemplateId) -> Result<Vec<u8>>;
}

/// Default store backed by content compiled into the binary
#[derive(Debug, Default)]
pub struct EmbeddedTemplates;

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, id: TemplateId) -> Result<Vec<u8>> {
        let text = match id {
            TemplateId::Directives => DIRECTIVES_JSON,
            TemplateId::Rules(platform) => return Ok(rules_for(platform).into_bytes()),
            TemplateId::Principles => PRINCIPLES_MD,
            TemplateId::Workflow => WORKFLOW_MD,
        };
        Ok(text.as_bytes().to_vec())
    }
}

fn rules_for(platform: Platform) -> String {
    let header = match platform {
        Platform::Cursor => "# AI Instructions (Cursor)",
        Platform::Claude => "# AI Instructions (Claude Code)",
        Platform::Codex => "# AI Instructions",
        Platform::Copilot => "# AI Instructions (GitHub Copilot)",
    };
    format!("{header}\n\n{RULES_BODY}")
}

const RULES_BODY: &str = "\
Refer to groundwork.json for the complete directive set.

Primary directives:
1. Evidence over assumptions
2. Code over documentation
3. Efficiency over verbosity
4. User value over features

Engineering loop:
1. Measure: search the codebase before changing it
2. Plan: write a checklist with success criteria
3. Execute: make minimal, reversible changes
4. Validate: run the quality gates

Quality standards:
- Components: typed interfaces and error boundaries
- APIs: input validation and structured error responses
- Functions: single responsibility
- Changes: accompanied by tests
";

const DIRECTIVES_JSON: &str = r#"{
  "version": 1,
  "directives": [
    "evidence-over-assumptions",
    "code-over-documentation",
    "efficiency-over-verbosity",
    "user-value-over-features"
  ],
  "qualityGates": {
    "tests": "required for behavior changes",
    "review": "changes stay minimal and reversible"
  }
}
"#;

const PRINCIPLES_MD: &str = "\
# Principles

Groundwork keeps project knowledge next to the code it describes.

- The context file (`context.json`) is the single source of truth for
  project metadata, decisions, and open questions.
- Decisions are appended, never rewritten; history stays auditable.
- Unknowns are listed explicitly so no one has to guess what is undecided.
";

const WORKFLOW_MD: &str = "\
# Workflow

1. Open the rule file and `groundwork.json` in your AI coding tool.
2. Resolve the unknowns listed in `.groundwork/context.json` as the
   project takes shape; record each resolution in the decision log.
3. Re-run `groundwork install --force` after upgrading to refresh the
   installed documentation while keeping your context.
";
