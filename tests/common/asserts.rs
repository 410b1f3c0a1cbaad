use cors_negotiator::{CorsDecision, Headers};

pub fn assert_simple(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Simple(result) => result.headers,
        other => panic!("expected simple decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, Option<u16>, bool) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status, result.end_response),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}
