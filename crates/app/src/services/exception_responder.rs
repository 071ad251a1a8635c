//! Exception responder — the single interception point for failed requests.
//!
//! Classifies an [`Exception`], derives the uniform [`ErrorResponseBody`] and
//! writes exactly one reply through the [`ReplyAdapter`].

use faultline_domain::exception::{Exception, ExceptionKind};
use faultline_domain::resolution::Resolution;
use faultline_domain::response::ErrorResponseBody;

use crate::ports::{Clock, ReplyAdapter, StatusCodeMapper, SystemClock, ValidationFlattener};

/// Classify `exception` into a [`Resolution`].
///
/// Transport exceptions take their status from the exception and their code
/// from `mapper`; domain exceptions carry their own code; anything else keeps
/// the defaults. Attached validation errors then override status and message.
#[must_use]
pub fn resolve<M, F>(exception: &Exception, mapper: &M, flattener: &F) -> Resolution
where
    M: StatusCodeMapper + ?Sized,
    F: ValidationFlattener + ?Sized,
{
    let resolution = match exception.kind() {
        ExceptionKind::Transport(transport) => {
            Resolution::transport(transport, |status| mapper.map_status(status))
        }
        ExceptionKind::Domain(domain) => Resolution::domain(domain),
        ExceptionKind::Unclassified(_) => Resolution::default(),
    };

    match exception.validation_errors() {
        Some(errors) => resolution.with_validation(flattener.flatten(errors)),
        None => resolution,
    }
}

/// Turns any exception into one uniform error reply.
///
/// Stateless apart from its collaborators; safe to share across concurrent
/// requests when they are.
#[derive(Debug, Clone, Default)]
pub struct ExceptionResponder<A, M, F, C = SystemClock> {
    adapter: A,
    mapper: M,
    flattener: F,
    clock: C,
}

impl<A, M, F> ExceptionResponder<A, M, F> {
    /// Create a responder stamping bodies with the system clock.
    #[must_use]
    pub fn new(adapter: A, mapper: M, flattener: F) -> Self {
        Self {
            adapter,
            mapper,
            flattener,
            clock: SystemClock,
        }
    }
}

impl<A, M, F, C> ExceptionResponder<A, M, F, C> {
    /// Replace the clock used to stamp response bodies.
    pub fn with_clock<C2>(self, clock: C2) -> ExceptionResponder<A, M, F, C2> {
        ExceptionResponder {
            adapter: self.adapter,
            mapper: self.mapper,
            flattener: self.flattener,
            clock,
        }
    }
}

impl<A, M, F, C> ExceptionResponder<A, M, F, C>
where
    A: ReplyAdapter,
    M: StatusCodeMapper,
    F: ValidationFlattener,
    C: Clock,
{
    /// Classify `exception` without building a body.
    #[must_use]
    pub fn resolve(&self, exception: &Exception) -> Resolution {
        resolve(exception, &self.mapper, &self.flattener)
    }

    /// Build the response body for `exception`, stamped with the current time.
    #[must_use]
    pub fn body_for(&self, exception: &Exception) -> ErrorResponseBody {
        self.resolve(exception).into_body(self.clock.now())
    }

    /// Build the body for `exception` and write it onto `target`.
    ///
    /// Performs exactly one reply write.
    pub fn respond(&self, exception: &Exception, target: &mut A::Target) {
        let body = self.body_for(exception);
        let status_code = body.status_code;
        self.adapter.reply(target, &body, status_code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flattener::ConstraintFlattener;
    use chrono::{Duration, TimeZone, Utc};
    use faultline_domain::exception::{DomainException, UnclassifiedException};
    use faultline_domain::resolution::is_http_status;
    use faultline_domain::time::Timestamp;
    use faultline_domain::validation::FieldViolation;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    /// Records every reply as `(status, body)`.
    #[derive(Default)]
    struct RecordingReplier;

    impl ReplyAdapter for RecordingReplier {
        type Target = Vec<(u16, ErrorResponseBody)>;

        fn reply(&self, target: &mut Self::Target, body: &ErrorResponseBody, status_code: u16) {
            target.push((status_code, body.clone()));
        }
    }

    struct StubMapper;

    impl StatusCodeMapper for StubMapper {
        fn map_status(&self, status: u16) -> String {
            match status {
                404 => "HTTP_NOT_FOUND".to_string(),
                403 => "HTTP_FORBIDDEN".to_string(),
                _ => "HTTP_UNKNOWN".to_string(),
            }
        }
    }

    /// Advances one second per call so consecutive bodies differ.
    struct TickingClock {
        next: Mutex<Timestamp>,
    }

    impl TickingClock {
        fn starting_at(ts: Timestamp) -> Self {
            Self {
                next: Mutex::new(ts),
            }
        }
    }

    impl Clock for TickingClock {
        fn now(&self) -> Timestamp {
            let mut next = self.next.lock().unwrap();
            let current = *next;
            *next = current + Duration::seconds(1);
            current
        }
    }

    fn start() -> Timestamp {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()
    }

    fn responder()
    -> ExceptionResponder<RecordingReplier, StubMapper, ConstraintFlattener, TickingClock> {
        ExceptionResponder::new(RecordingReplier, StubMapper, ConstraintFlattener)
            .with_clock(TickingClock::starting_at(start()))
    }

    fn respond_once(exception: &Exception) -> (u16, ErrorResponseBody) {
        let mut replies = Vec::new();
        responder().respond(exception, &mut replies);
        assert_eq!(replies.len(), 1, "exactly one reply must be written");
        replies.remove(0)
    }

    fn email_violation() -> FieldViolation {
        FieldViolation::new("email").with_constraint("isEmail", "email must be an email")
    }

    #[test]
    fn should_map_transport_exception_with_message_object() {
        let exception = Exception::transport(404, json!({ "message": "not found" }));
        let (status, body) = respond_once(&exception);

        assert_eq!(status, 404);
        assert_eq!(body.status_code, 404);
        assert_eq!(body.error_code, "HTTP_NOT_FOUND");
        assert_eq!(body.message, json!("not found"));
        assert_eq!(body.timestamp, start());
    }

    #[test]
    fn should_pass_string_transport_payload_verbatim() {
        let exception = Exception::transport(403, "forbidden");
        let (_, body) = respond_once(&exception);

        assert_eq!(body.status_code, 403);
        assert_eq!(body.error_code, "HTTP_FORBIDDEN");
        assert_eq!(body.message, json!("forbidden"));
    }

    #[test]
    fn should_hide_message_of_domain_exception_without_status() {
        let exception: Exception = DomainException::new("USER_NOT_FOUND")
            .with_message("row missing")
            .into();
        let (status, body) = respond_once(&exception);

        assert_eq!(status, 500);
        assert_eq!(body.error_code, "USER_NOT_FOUND");
        assert_eq!(body.message, json!("ERROR_MESSAGE_FALLBACK"));
    }

    #[test]
    fn should_use_safe_message_of_client_error_domain_exception() {
        let exception: Exception = DomainException::new("BAD_INPUT")
            .with_status(400)
            .with_safe_message("please check input")
            .into();
        let (status, body) = respond_once(&exception);

        assert_eq!(status, 400);
        assert_eq!(body.error_code, "BAD_INPUT");
        assert_eq!(body.message, json!("please check input"));
    }

    #[test]
    fn should_fall_back_to_defaults_for_unclassified_exception() {
        let exception = Exception::unclassified(std::io::Error::other("socket closed"));
        let (status, body) = respond_once(&exception);

        assert_eq!(status, 500);
        assert_eq!(body.error_code, "ERROR_CODE_UNKNOWN");
        assert_eq!(body.message, json!("ERROR_MESSAGE_FALLBACK"));
    }

    #[test]
    fn should_treat_panics_as_unclassified() {
        let exception: Exception = UnclassifiedException::Panic("index out of bounds".into()).into();
        let (_, body) = respond_once(&exception);
        assert_eq!(body.status_code, 500);
        assert_eq!(body.message, json!("ERROR_MESSAGE_FALLBACK"));
    }

    #[test]
    fn should_override_any_classification_with_validation_errors() {
        let exceptions = vec![
            Exception::transport(404, json!({ "message": "not found" })),
            DomainException::new("BAD_INPUT").with_status(422).into(),
            DomainException::new("DB_DOWN").with_status(503).into(),
            Exception::unclassified(std::io::Error::other("boom")),
        ];

        for exception in exceptions {
            let exception = exception.with_validation_errors(vec![email_violation()]);
            let (status, body) = respond_once(&exception);
            assert_eq!(status, 400);
            assert_eq!(body.status_code, 400);
            assert_eq!(body.message, json!(["email must be an email"]));
        }
    }

    #[test]
    fn should_keep_error_code_when_validation_overrides() {
        let exception = Exception::transport(404, "missing")
            .with_validation_errors(vec![email_violation()]);
        let (_, body) = respond_once(&exception);
        assert_eq!(body.error_code, "HTTP_NOT_FOUND");

        let exception = Exception::unclassified(std::io::Error::other("boom"))
            .with_validation_errors(vec![email_violation()]);
        let (_, body) = respond_once(&exception);
        assert_eq!(body.error_code, "ERROR_CODE_UNKNOWN");
    }

    #[test]
    fn should_override_even_with_empty_validation_list() {
        let exception = Exception::transport(404, "missing").with_validation_errors(Vec::new());
        let (status, body) = respond_once(&exception);
        assert_eq!(status, 400);
        assert_eq!(body.message, json!([]));
    }

    #[test]
    fn should_only_differ_in_timestamp_when_invoked_twice() {
        let responder = responder();
        let exception: Exception = DomainException::new("BAD_INPUT")
            .with_status(400)
            .with_safe_message("please check input")
            .into();

        let mut replies = Vec::new();
        responder.respond(&exception, &mut replies);
        responder.respond(&exception, &mut replies);

        let (first, second) = (&replies[0].1, &replies[1].1);
        assert_ne!(first.timestamp, second.timestamp);
        assert_eq!(
            ErrorResponseBody {
                timestamp: second.timestamp,
                ..first.clone()
            },
            *second
        );
    }

    #[test]
    fn should_always_produce_all_fields_with_valid_status() {
        let exceptions = vec![
            Exception::transport(0, Value::Null),
            Exception::transport(999, json!({ "message": null })),
            DomainException::new("").with_status(1).into(),
            DomainException::new("X").with_status(700).with_message("hidden").into(),
            Exception::new(UnclassifiedException::Message("opaque".into())),
        ];

        for exception in exceptions {
            let (status, body) = respond_once(&exception);
            assert!(is_http_status(status), "status {status} must be valid");
            assert_eq!(status, body.status_code);
            assert!(!body.error_code.is_empty());

            let json = serde_json::to_value(&body).unwrap();
            for key in ["statusCode", "errorCode", "message", "timestamp"] {
                assert!(json.get(key).is_some(), "missing {key}");
            }
        }
    }

    #[test]
    fn should_resolve_without_replying() {
        let exception = Exception::transport(404, "missing");
        let resolution = resolve(&exception, &StubMapper, &ConstraintFlattener);
        assert_eq!(resolution.status_code, 404);
        assert_eq!(resolution.error_code, "HTTP_NOT_FOUND");
    }

    #[test]
    fn should_use_system_clock_by_default() {
        let responder = ExceptionResponder::new(RecordingReplier, StubMapper, ConstraintFlattener);
        let before = Utc::now();
        let body = responder.body_for(&Exception::transport(404, "missing"));
        assert!(body.timestamp >= before);
        assert!(body.timestamp <= Utc::now());
    }
}
