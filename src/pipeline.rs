//! Entry points that run the export mirror rewrite over a whole module.
//!
//! The syntax tree is produced by an external parser. [`minify_json`] accepts
//! its JSON output directly, either a bare `Program` node or Babel's `File`
//! wrapper, and hands back the rewritten tree in the same shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use exportmirror_core::{MirrorConfig, MirrorError, MirrorResult, UniqueStringSource};
use exportmirror_ecma::{ExportMirrorRewriter, MirrorExportCollector, Program, RewriteReport};

/// Result of [`minify_json`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinifyOutput {
    /// The rewritten tree, serialized in the shape it was given.
    pub ast_json: String,
    pub report: RewriteReport,
}

/// Rewrite the mirror exports of `program` with values drawn from `source`.
///
/// The source is borrowed so several modules can share one sequence and never
/// receive the same value twice.
pub fn minify_program(
    program: &mut Program,
    source: &mut impl UniqueStringSource,
) -> MirrorResult<RewriteReport> {
    ExportMirrorRewriter::new(source).run(program)
}

/// Parse a JSON syntax tree, rewrite it with a fresh generator built from
/// `config`, and serialize it back.
pub fn minify_json(input: &str, config: &MirrorConfig) -> MirrorResult<MinifyOutput> {
    let mut generator = config.build_generator()?;
    minify_json_with(input, &mut generator)
}

/// Like [`minify_json`], drawing values from a caller-supplied source.
pub fn minify_json_with(
    input: &str,
    source: &mut impl UniqueStringSource,
) -> MirrorResult<MinifyOutput> {
    let mut tree = parse_tree(input)?;

    let root_type = node_type(&tree).map(str::to_string);
    let report = match root_type.as_deref() {
        Some("Program") => {
            debug!("rewriting bare Program");
            rewrite_value(&mut tree, source)?
        }
        Some("File") => {
            debug!("rewriting File wrapper");
            let program = tree
                .get_mut("program")
                .ok_or_else(|| MirrorError::invalid_ast("File node has no program"))?;
            if node_type(program) != Some("Program") {
                return Err(MirrorError::invalid_ast(format!(
                    "File.program is {}, expected Program",
                    node_type(program).unwrap_or("untyped")
                )));
            }
            rewrite_value(program, source)?
        }
        Some(other) => {
            return Err(MirrorError::invalid_ast(format!(
                "expected a Program or File node, found {}",
                other
            )))
        }
        None => return Err(MirrorError::invalid_ast("root node has no type")),
    };

    Ok(MinifyOutput {
        ast_json: serde_json::to_string(&tree)
            .map_err(|e| MirrorError::internal(format!("failed to serialize tree: {}", e)))?,
        report,
    })
}

/// Names of the mirror exports in `program`, in source order. Consumes no
/// generator values.
pub fn find_mirror_exports(program: &Program) -> Vec<String> {
    MirrorExportCollector::collect(program)
        .into_iter()
        .map(|export| export.name)
        .collect()
}

/// Parse JSON of any nesting depth. Parsers emit one JSON level per
/// expression level, so long operator chains easily pass serde_json's
/// default limit of 128.
fn parse_tree(input: &str) -> MirrorResult<Value> {
    let mut deserializer = serde_json::Deserializer::from_str(input);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

fn node_type(value: &Value) -> Option<&str> {
    value.get("type").and_then(Value::as_str)
}

/// Rewrite a `Program` held as a JSON value, replacing it in place.
fn rewrite_value(
    value: &mut Value,
    source: &mut impl UniqueStringSource,
) -> MirrorResult<RewriteReport> {
    let mut program = Program::deserialize(serde_stacker::Deserializer::new(value.take()))?;
    let report = minify_program(&mut program, source)?;
    *value = serde_json::to_value(&program)
        .map_err(|e| MirrorError::internal(format!("failed to serialize program: {}", e)))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exportmirror_core::{Alphabet, ErrorCode, SequenceGenerator};
    use serde_json::json;

    fn mirror_program() -> Value {
        json!({
            "type": "Program",
            "sourceType": "module",
            "body": [{
                "type": "ExportNamedDeclaration",
                "specifiers": [],
                "source": null,
                "declaration": {
                    "type": "VariableDeclaration",
                    "kind": "const",
                    "declarations": [{
                        "type": "VariableDeclarator",
                        "id": { "type": "Identifier", "name": "FOO" },
                        "init": {
                            "type": "StringLiteral",
                            "value": "FOO",
                            "extra": { "raw": "'FOO'", "rawValue": "FOO" }
                        }
                    }]
                }
            }]
        })
    }

    fn rewritten_value(output: &MinifyOutput, pointer: &str) -> Value {
        let tree: Value = parse_tree(&output.ast_json).unwrap();
        tree.pointer(pointer).cloned().unwrap_or(Value::Null)
    }

    const INIT: &str = "/body/0/declaration/declarations/0/init/value";

    #[test]
    fn bare_program() {
        let output = minify_json(&mirror_program().to_string(), &MirrorConfig::default()).unwrap();
        assert_eq!(rewritten_value(&output, INIT), "a");
        assert_eq!(output.report.len(), 1);
    }

    #[test]
    fn file_wrapper_keeps_its_shape() {
        let file = json!({
            "type": "File",
            "comments": [],
            "program": mirror_program()
        });
        let output = minify_json(&file.to_string(), &MirrorConfig::default()).unwrap();
        assert_eq!(rewritten_value(&output, &format!("/program{}", INIT)), "a");
        assert_eq!(rewritten_value(&output, "/comments"), json!([]));
    }

    #[test]
    fn config_start_offsets_the_sequence() {
        let config = MirrorConfig {
            alphabet: "ab".to_string(),
            start: 2,
            quote: None,
        };
        let output = minify_json(&mirror_program().to_string(), &config).unwrap();
        assert_eq!(rewritten_value(&output, INIT), "aa");
    }

    #[test]
    fn shared_source_across_modules() {
        let mut generator = SequenceGenerator::new(Alphabet::parse("xyz").unwrap());
        let input = mirror_program().to_string();
        let first = minify_json_with(&input, &mut generator).unwrap();
        let second = minify_json_with(&input, &mut generator).unwrap();
        assert_eq!(rewritten_value(&first, INIT), "x");
        assert_eq!(rewritten_value(&second, INIT), "y");
    }

    #[test]
    fn rejects_malformed_json() {
        let err = minify_json("{ not json", &MirrorConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidAst);
    }

    #[test]
    fn rejects_other_root_nodes() {
        let err = minify_json(r#"{"type": "Identifier", "name": "x"}"#, &MirrorConfig::default())
            .unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidAst);
        assert!(err.to_string().contains("Identifier"));
    }

    #[test]
    fn rejects_file_without_program() {
        let err = minify_json(r#"{"type": "File"}"#, &MirrorConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidAst);
    }

    #[test]
    fn rejects_invalid_alphabet_before_parsing() {
        let config = MirrorConfig {
            alphabet: "a".to_string(),
            ..MirrorConfig::default()
        };
        let err = minify_json("{ not json", &config).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::Configuration);
    }

    /// `export const FOO = 'FOO'; x + 'a' + 'a' + ...;` with `depth` operators.
    fn program_with_chain(depth: usize) -> String {
        let mut chain = json!({ "type": "Identifier", "name": "x" });
        for _ in 0..depth {
            chain = json!({
                "type": "BinaryExpression",
                "operator": "+",
                "left": chain,
                "right": { "type": "StringLiteral", "value": "a" }
            });
        }
        let mut program = mirror_program();
        program["body"]
            .as_array_mut()
            .unwrap()
            .push(json!({ "type": "ExpressionStatement", "expression": chain }));
        serde_json::to_string(&program).unwrap()
    }

    #[test]
    fn deeply_nested_statement_is_kept() {
        let input = program_with_chain(400);

        let output = minify_json(&input, &MirrorConfig::default()).unwrap();

        assert_eq!(output.report.len(), 1);
        assert_eq!(rewritten_value(&output, INIT), "a");
        let before: Value = parse_tree(&input).unwrap();
        let after: Value = parse_tree(&output.ast_json).unwrap();
        assert_eq!(after["body"][1], before["body"][1]);
    }

    #[test]
    fn rejects_trailing_input() {
        let input = format!("{} {{}}", mirror_program());
        let err = minify_json(&input, &MirrorConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), ErrorCode::InvalidAst);
    }

    #[test]
    fn finds_names_without_rewriting() {
        let program: Program = serde_json::from_value(mirror_program()).unwrap();
        assert_eq!(find_mirror_exports(&program), vec!["FOO"]);
    }
}
