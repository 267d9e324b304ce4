//! The reconciliation matcher.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use navalha_shared::types::{Money, RunId, TenantId};

use super::types::{
    GatewayRecord, GatewayStatus, LedgerRecord, LedgerRecordStatus, MatchOutcome,
    ReconciliationAction, ReconciliationReport, ReconciliationRun, RecordDetail, Resolution,
};

/// Matches the external gateway feed against the internal ledger.
///
/// The matcher is a pure function of its inputs: rerunning it over an
/// unchanged input pair produces an identical report, and its auto-fixes
/// are guarded by the candidate search itself, so applying them and
/// rerunning never duplicates ledger records.
pub struct ReconciliationService;

impl ReconciliationService {
    /// Reconciles one tenant's period.
    ///
    /// Matching key: the gateway payment identifier when the ledger side
    /// carries one; otherwise the composite (amount, date, counterparty)
    /// over ledger records without an external reference. A ledger record
    /// is consumed by at most one gateway record.
    #[must_use]
    pub fn run(
        tenant_id: TenantId,
        period_start: NaiveDate,
        period_end: NaiveDate,
        gateway: &[GatewayRecord],
        ledger: &[LedgerRecord],
        now: DateTime<Utc>,
    ) -> ReconciliationReport {
        let mut consumed = vec![false; ledger.len()];
        let mut details = Vec::new();
        let mut actions = Vec::new();
        let mut fixed_refs: HashSet<&str> = HashSet::new();

        let by_external_ref = index_by_external_ref(ledger);
        let by_composite = index_by_composite(ledger);

        for record in gateway {
            let detail = match_one(
                tenant_id,
                record,
                ledger,
                &by_external_ref,
                &by_composite,
                &mut consumed,
                &mut actions,
                &mut fixed_refs,
            );
            details.push(detail);
        }

        // Anything the gateway never claimed is missing on its side.
        for (index, ledger_record) in ledger.iter().enumerate() {
            if consumed[index] || ledger_record.status == LedgerRecordStatus::Canceled {
                continue;
            }
            details.push(RecordDetail {
                external_id: ledger_record.external_ref.clone(),
                ledger_id: Some(ledger_record.id),
                gateway_amount: None,
                ledger_amount: Some(ledger_record.amount),
                outcome: MatchOutcome::MissingInGateway,
                resolution: Resolution::PendingReview,
                note: Some("no gateway record claimed this ledger entry".to_string()),
            });
        }

        let divergences = details
            .iter()
            .filter(|detail| detail.outcome != MatchOutcome::Matched)
            .count();
        let auto_fixed = details
            .iter()
            .filter(|detail| detail.resolution == Resolution::AutoFixed)
            .count();
        let pending_review = details
            .iter()
            .filter(|detail| detail.resolution == Resolution::PendingReview)
            .count();

        tracing::info!(
            tenant = %tenant_id,
            %period_start,
            %period_end,
            total_gateway = gateway.len(),
            total_ledger = ledger.len(),
            divergences,
            auto_fixed,
            pending_review,
            "reconciliation run completed"
        );

        ReconciliationReport {
            run: ReconciliationRun {
                id: RunId::new(),
                tenant_id,
                period_start,
                period_end,
                total_gateway: gateway.len(),
                total_ledger: ledger.len(),
                divergences,
                auto_fixed,
                pending_review,
                details,
                created_at: now,
            },
            actions,
        }
    }
}

type CompositeKey = (Money, NaiveDate, Option<String>);

fn index_by_external_ref(ledger: &[LedgerRecord]) -> HashMap<&str, Vec<usize>> {
    let mut index: HashMap<&str, Vec<usize>> = HashMap::new();
    for (position, record) in ledger.iter().enumerate() {
        if let Some(external_ref) = record.external_ref.as_deref() {
            index.entry(external_ref).or_default().push(position);
        }
    }
    index
}

fn index_by_composite(ledger: &[LedgerRecord]) -> HashMap<CompositeKey, Vec<usize>> {
    let mut index: HashMap<CompositeKey, Vec<usize>> = HashMap::new();
    for (position, record) in ledger.iter().enumerate() {
        // Records already linked to a gateway payment only ever match by
        // that identifier; a composite hit against them would be a
        // coincidence, not an identity.
        if record.external_ref.is_none() {
            index
                .entry((record.amount, record.date, record.counterparty.clone()))
                .or_default()
                .push(position);
        }
    }
    index
}

#[allow(clippy::too_many_arguments)]
fn match_one<'feed>(
    tenant_id: TenantId,
    record: &'feed GatewayRecord,
    ledger: &[LedgerRecord],
    by_external_ref: &HashMap<&str, Vec<usize>>,
    by_composite: &HashMap<CompositeKey, Vec<usize>>,
    consumed: &mut [bool],
    actions: &mut Vec<ReconciliationAction>,
    fixed_refs: &mut HashSet<&'feed str>,
) -> RecordDetail {
    let candidates = find_candidates(record, ledger, by_external_ref, by_composite, consumed);

    match candidates {
        Candidates::None => missing_in_ledger(tenant_id, record, actions, fixed_refs),
        Candidates::Ambiguous(count) => RecordDetail {
            external_id: Some(record.external_id.clone()),
            ledger_id: None,
            gateway_amount: Some(record.amount),
            ledger_amount: None,
            outcome: MatchOutcome::Divergent,
            resolution: Resolution::PendingReview,
            note: Some(format!(
                "{count} ledger candidates share the same key and creation time"
            )),
        },
        Candidates::One(position) => {
            consumed[position] = true;
            compare_pair(record, &ledger[position])
        }
    }
}

enum Candidates {
    None,
    One(usize),
    Ambiguous(usize),
}

fn find_candidates(
    record: &GatewayRecord,
    ledger: &[LedgerRecord],
    by_external_ref: &HashMap<&str, Vec<usize>>,
    by_composite: &HashMap<CompositeKey, Vec<usize>>,
    consumed: &[bool],
) -> Candidates {
    let positions = by_external_ref
        .get(record.external_id.as_str())
        .or_else(|| {
            by_composite.get(&(
                record.amount,
                record.transaction_date,
                record.counterparty.clone(),
            ))
        });

    let mut available: Vec<usize> = positions
        .map(|positions| {
            positions
                .iter()
                .copied()
                .filter(|&position| !consumed[position])
                .collect()
        })
        .unwrap_or_default();

    if available.is_empty() {
        return Candidates::None;
    }

    // Deterministic tie-break: earliest created first, then by id. When
    // two candidates are equally old the identity is genuinely ambiguous
    // and no guess is made.
    available.sort_by_key(|&position| (ledger[position].created_at, ledger[position].id));
    if available.len() > 1
        && ledger[available[0]].created_at == ledger[available[1]].created_at
    {
        return Candidates::Ambiguous(available.len());
    }
    Candidates::One(available[0])
}

fn missing_in_ledger<'feed>(
    tenant_id: TenantId,
    record: &'feed GatewayRecord,
    actions: &mut Vec<ReconciliationAction>,
    fixed_refs: &mut HashSet<&'feed str>,
) -> RecordDetail {
    // A feed that repeats an external id must not double-create; the
    // second occurrence goes to review instead.
    if !fixed_refs.insert(record.external_id.as_str()) {
        return RecordDetail {
            external_id: Some(record.external_id.clone()),
            ledger_id: None,
            gateway_amount: Some(record.amount),
            ledger_amount: None,
            outcome: MatchOutcome::MissingInLedger,
            resolution: Resolution::PendingReview,
            note: Some("duplicate external id in gateway feed".to_string()),
        };
    }

    let safely_derivable = record.status.is_collectable() && record.amount.is_positive();

    if safely_derivable {
        actions.push(ReconciliationAction::CreateReceivable {
            tenant_id,
            external_ref: record.external_id.clone(),
            amount: record.amount,
            date: record.transaction_date,
            description: format!("Gateway payment {}", record.external_id),
        });
        RecordDetail {
            external_id: Some(record.external_id.clone()),
            ledger_id: None,
            gateway_amount: Some(record.amount),
            ledger_amount: None,
            outcome: MatchOutcome::MissingInLedger,
            resolution: Resolution::AutoFixed,
            note: None,
        }
    } else {
        RecordDetail {
            external_id: Some(record.external_id.clone()),
            ledger_id: None,
            gateway_amount: Some(record.amount),
            ledger_amount: None,
            outcome: MatchOutcome::MissingInLedger,
            resolution: Resolution::PendingReview,
            note: Some(format!(
                "gateway status {:?} is not safely derivable",
                record.status
            )),
        }
    }
}

fn compare_pair(record: &GatewayRecord, ledger_record: &LedgerRecord) -> RecordDetail {
    let base = RecordDetail {
        external_id: Some(record.external_id.clone()),
        ledger_id: Some(ledger_record.id),
        gateway_amount: Some(record.amount),
        ledger_amount: Some(ledger_record.amount),
        outcome: MatchOutcome::Matched,
        resolution: Resolution::NotRequired,
        note: None,
    };

    if record.amount != ledger_record.amount {
        return RecordDetail {
            outcome: MatchOutcome::Divergent,
            resolution: Resolution::PendingReview,
            note: Some(format!(
                "amount mismatch: gateway {} vs ledger {}",
                record.amount, ledger_record.amount
            )),
            ..base
        };
    }

    // A pending gateway charge agrees with any live ledger state; final
    // gateway states must agree with the ledger's terminal state.
    let status_conflict = match record.status {
        GatewayStatus::Pending => false,
        GatewayStatus::Paid | GatewayStatus::Settled => {
            ledger_record.status == LedgerRecordStatus::Canceled
        }
        GatewayStatus::Refused | GatewayStatus::Refunded => {
            ledger_record.status != LedgerRecordStatus::Canceled
        }
    };
    if status_conflict {
        return RecordDetail {
            outcome: MatchOutcome::Divergent,
            resolution: Resolution::PendingReview,
            note: Some(format!(
                "status mismatch: gateway {:?} vs ledger {:?}",
                record.status, ledger_record.status
            )),
            ..base
        };
    }

    base
}
