//! Capacity-aware lead routing
//!
//! A lead goes to the least-loaded member holding its tier's role. When that
//! role has no spare capacity the roster is scanned by role hierarchy, most
//! senior first, and the first member anywhere with room takes it. With no
//! capacity left at all the lead stays unassigned, which is a normal outcome.

use lead_router_core::{Lead, RepType, TeamMember};

use crate::tier::tier_info;

/// Result of a full routing pass
#[derive(Debug, Clone)]
pub struct RoutingOutcome {
    /// Leads in score-descending order with assignment and tier fields set
    pub leads: Vec<Lead>,
    /// Roster with `assigned_leads` recomputed from scratch
    pub team_members: Vec<TeamMember>,
}

impl RoutingOutcome {
    pub fn assigned_count(&self) -> usize {
        self.leads.iter().filter(|l| l.is_assigned()).count()
    }

    pub fn unassigned_count(&self) -> usize {
        self.leads.len() - self.assigned_count()
    }
}

/// Index into `team` of the member that should take `lead`
fn select_member(lead: &Lead, team: &[TeamMember]) -> Option<usize> {
    let target = tier_info(lead.score).rep_type;

    // min_by_key keeps the first minimum, so ties go to roster order
    let best = team
        .iter()
        .enumerate()
        .filter(|(_, m)| m.role == target && m.has_capacity())
        .min_by_key(|(_, m)| m.assigned_leads)
        .map(|(idx, _)| idx);
    if best.is_some() {
        return best;
    }

    RepType::HIERARCHY.iter().find_map(|role| {
        team.iter()
            .position(|m| m.role == *role && m.has_capacity())
    })
}

/// Pick a member id for a single lead without mutating the roster
///
/// The caller is responsible for incrementing the chosen member's
/// `assigned_leads`.
pub fn route_lead(lead: &Lead, team: &[TeamMember]) -> Option<String> {
    select_member(lead, team).map(|idx| team[idx].id.clone())
}

/// Route every lead against a fresh copy of the roster
///
/// All prior assignment counts are discarded, including those for leads not
/// in `leads`. Leads are matched highest score first so lower-value leads
/// cannot starve them of capacity. Scores are taken as already fresh.
pub fn route_all_leads(leads: &[Lead], team: &[TeamMember]) -> RoutingOutcome {
    let mut team_members: Vec<TeamMember> = team
        .iter()
        .cloned()
        .map(|mut m| {
            m.assigned_leads = 0;
            m
        })
        .collect();

    let mut sorted: Vec<Lead> = leads.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    for lead in sorted.iter_mut() {
        let info = tier_info(lead.score);
        lead.apply_tier(&info);

        match select_member(lead, &team_members) {
            Some(idx) => {
                let member = &mut team_members[idx];
                member.assigned_leads += 1;
                lead.assigned_to = Some(member.id.clone());

                tracing::debug!(
                    lead_id = %lead.id,
                    score = lead.score,
                    tier = info.tier.label(),
                    member_id = %member.id,
                    role = %member.role,
                    "Lead assigned"
                );
                metrics::counter!("lead_router_leads_routed_total", "outcome" => "assigned")
                    .increment(1);
            }
            None => {
                lead.assigned_to = None;

                tracing::debug!(
                    lead_id = %lead.id,
                    score = lead.score,
                    tier = info.tier.label(),
                    "No capacity, lead left unassigned"
                );
                metrics::counter!("lead_router_leads_routed_total", "outcome" => "unassigned")
                    .increment(1);
            }
        }
    }

    let outcome = RoutingOutcome {
        leads: sorted,
        team_members,
    };

    tracing::info!(
        leads = outcome.leads.len(),
        team = outcome.team_members.len(),
        assigned = outcome.assigned_count(),
        unassigned = outcome.unassigned_count(),
        "Routing pass complete"
    );

    outcome
}
