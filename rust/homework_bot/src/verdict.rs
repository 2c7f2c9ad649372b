use serde_json::Value;

use crate::error::PollError;

/// Review outcome of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    pub const ALL: [Verdict; 3] = [Verdict::Approved, Verdict::Reviewing, Verdict::Rejected];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Verdict::Approved),
            "reviewing" => Some(Verdict::Reviewing),
            "rejected" => Some(Verdict::Rejected),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Reviewing => "reviewing",
            Verdict::Rejected => "rejected",
        }
    }

    pub fn phrase(self) -> &'static str {
        match self {
            Verdict::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Verdict::Reviewing => "Работа взята на проверку ревьюером.",
            Verdict::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Turns one homework record into the chat message announcing its new status.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let name = homework
        .get("homework_name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PollError::shape("homework has no string `homework_name`"))?;
    let code = homework
        .get("status")
        .and_then(|v| v.as_str())
        .ok_or_else(|| PollError::shape("homework has no string `status`"))?;
    let verdict = Verdict::from_code(code)
        .ok_or_else(|| PollError::shape(format!("unknown homework status `{}`", code)))?;

    Ok(format!("Изменился статус проверки работы \"{}\". {}", name, verdict.phrase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_known_status_names_homework_and_verdict() {
        for verdict in Verdict::ALL {
            let hw = json!({"homework_name": "hw_sprint_7", "status": verdict.code()});
            let msg = parse_status(&hw).unwrap();
            assert!(msg.contains("hw_sprint_7"), "{msg}");
            assert!(msg.contains(verdict.phrase()), "{msg}");
        }
    }

    #[test]
    fn approved_message_text() {
        let msg = parse_status(&json!({"homework_name": "hw1", "status": "approved"})).unwrap();
        assert_eq!(
            msg,
            "Изменился статус проверки работы \"hw1\". Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn unknown_status_is_shape_error() {
        let err = parse_status(&json!({"homework_name": "hw1", "status": "lost"})).unwrap_err();
        assert!(matches!(err, PollError::Shape(_)));
    }

    #[test]
    fn missing_fields_are_shape_errors() {
        for hw in [
            json!({"status": "approved"}),
            json!({"homework_name": "hw1"}),
            json!({"homework_name": 7, "status": "approved"}),
            json!("hw1"),
        ] {
            assert!(matches!(parse_status(&hw), Err(PollError::Shape(_))), "{hw}");
        }
    }
}
