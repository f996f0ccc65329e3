use serde_json::Value;
use tower_lsp::jsonrpc::{Error, Result};

pub const COMMAND_NEW_DOCUMENT: &str = "obsmark.newDocument";

/// Dispatch a workspace/executeCommand request.
///
/// `obsmark.newDocument` answers with the starter page as a JSON string;
/// opening a buffer with it is the client's job, and a client-side failure
/// to do so is surfaced there, never retried here.
pub fn execute_command(command: &str, _arguments: &[Value], template: &str) -> Result<Option<Value>> {
    match command {
        COMMAND_NEW_DOCUMENT => Ok(Some(Value::String(template.to_string()))),
        _ => Err(Error::invalid_request()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_command_answers_with_the_payload() {
        let result = execute_command(COMMAND_NEW_DOCUMENT, &[], "starter page").unwrap();
        assert_eq!(result, Some(Value::String("starter page".to_string())));
    }

    #[test]
    fn arguments_are_ignored() {
        let args = vec![Value::String("extra".into())];
        let result = execute_command(COMMAND_NEW_DOCUMENT, &args, "starter page").unwrap();
        assert_eq!(result, Some(Value::String("starter page".to_string())));
    }

    #[test]
    fn unknown_commands_are_invalid_requests() {
        assert!(execute_command("obsmark.somethingElse", &[], "starter page").is_err());
    }
}
