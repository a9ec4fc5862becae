use super::{ProtocolViolation, translate_target};
use crate::api;
use crate::wire;

pub fn translate_rule_output(
    output: wire::RuleOutput,
) -> Result<api::RuleOutput, ProtocolViolation> {
    let wire::RuleOutput {
        investigation_target,
        rule_id,
        triggered,
        message,
    } = output;
    let investigation_target = translate_target(investigation_target)?;
    Ok(api::RuleOutput {
        investigation_target,
        rule_id,
        triggered,
        message,
    })
}
