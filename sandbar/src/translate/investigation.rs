use super::{ProtocolViolation, translate_rule_output, translate_target};
use crate::api;
use crate::wire;

pub fn translate_alert(alert: wire::Alert) -> Result<api::Alert, ProtocolViolation> {
    let wire::Alert {
        investigation_target,
        outputs,
        alert_id,
        created_at,
    } = alert;
    let investigation_target = translate_target(investigation_target)?;
    let outputs = outputs
        .into_iter()
        .map(translate_rule_output)
        .collect::<Result<_, _>>()?;
    Ok(api::Alert {
        investigation_target,
        outputs,
        alert_id,
        created_at,
    })
}

pub fn translate_investigation(
    investigation: wire::Investigation,
) -> Result<api::Investigation, ProtocolViolation> {
    let wire::Investigation {
        sandbar_investigation_id,
        target,
        alerts,
        created_at,
    } = investigation;
    let target = target
        .into_iter()
        .map(|target| translate_target(Some(target)))
        .collect::<Result<_, _>>()?;
    let alerts = alerts
        .into_iter()
        .map(translate_alert)
        .collect::<Result<_, _>>()?;
    Ok(api::Investigation {
        sandbar_investigation_id,
        target,
        alerts,
        created_at,
    })
}
