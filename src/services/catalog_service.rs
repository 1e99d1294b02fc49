use chrono::Utc;
use serde_json::json;

use crate::models::{
    DocumentAction, EventType, LegalDocument, SimulationEvent, TimelineItem,
};

/// The fixed record templates behind the demo API. Everything here is
/// immutable after construction; the only per-request value is the
/// timestamp stamped onto simulation events.
///
/// Order matters throughout: callers render these sequences top to bottom,
/// so the sequence itself is part of the contract.
pub struct ResponseCatalog;

impl ResponseCatalog {
    pub fn new() -> Self {
        ResponseCatalog
    }

    /// Current wall-clock time in the HH:MM:SS form events carry.
    pub fn current_stamp() -> String {
        Utc::now().format("%H:%M:%S").to_string()
    }

    /// The six-event response sequence, every event carrying the same
    /// caller-supplied stamp. The level of each event is derived from its
    /// type, never stored separately.
    pub fn simulation_events(&self, stamp: &str) -> Vec<SimulationEvent> {
        let script: [(EventType, &str); 6] = [
            (EventType::Info, "Monitoring… no threats detected."),
            (EventType::Ingest, "New SMS analysed."),
            (EventType::Detect, "Suspicious UPI intent detected."),
            (EventType::Freeze, "Auto-freeze triggered: UPI channel frozen."),
            (EventType::Legal, "Complaint drafted for cyber cell + RBI ombudsman."),
            (EventType::Recover, "Recovery workflow initiated with bank dispute."),
        ];

        script
            .into_iter()
            .map(|(event_type, message)| SimulationEvent {
                t: stamp.to_string(),
                event_type,
                message: message.to_string(),
                level: event_type.level(),
            })
            .collect()
    }

    /// Fixed six-entry case history for the demo fraud incident.
    pub fn timeline(&self) -> Vec<TimelineItem> {
        vec![
            TimelineItem {
                time: "12:00".to_string(),
                title: "Fraud request created".to_string(),
                data: json!({"channel": "UPI", "amount": "₹9,999", "upi_id": "abc@bank"}),
            },
            TimelineItem {
                time: "12:02".to_string(),
                title: "AFSA detected mismatch".to_string(),
                data: json!({"pattern": "merchant-risk-score>0.82", "device_ip": "103.25.*"}),
            },
            TimelineItem {
                time: "12:03".to_string(),
                title: "UPI frozen".to_string(),
                data: json!({"action": "temporary_freeze", "duration": "30 min"}),
            },
            TimelineItem {
                time: "12:05".to_string(),
                title: "Complaint drafted".to_string(),
                data: json!({"refs": ["Cyber Cell", "RBI Ombudsman"]}),
            },
            TimelineItem {
                time: "12:07".to_string(),
                title: "Evidence package created".to_string(),
                data: json!({"items": ["SMS", "UPI handle", "IP hash"]}),
            },
            TimelineItem {
                time: "12:10".to_string(),
                title: "Recovery workflow initiated".to_string(),
                data: json!({"ticket": "BK-34219", "priority": "P1"}),
            },
        ]
    }

    /// The four pre-drafted legal document descriptors. Every document
    /// supports the same three actions, in the same order.
    pub fn legal_documents(&self) -> Vec<LegalDocument> {
        let all_actions = vec![
            DocumentAction::Preview,
            DocumentAction::Download,
            DocumentAction::Send,
        ];

        vec![
            LegalDocument {
                id: "cyber_complaint".to_string(),
                title: "Cyber Complaint Draft".to_string(),
                purpose: "Pre-filled FIR-style complaint".to_string(),
                actions: all_actions.clone(),
            },
            LegalDocument {
                id: "rbi_letter".to_string(),
                title: "RBI Ombudsman Letter".to_string(),
                purpose: "Escalation note with annexures".to_string(),
                actions: all_actions.clone(),
            },
            LegalDocument {
                id: "bank_dispute".to_string(),
                title: "Bank Dispute Form (Autofilled)".to_string(),
                purpose: "Card/UPI chargeback workflow".to_string(),
                actions: all_actions.clone(),
            },
            LegalDocument {
                id: "reconstruction".to_string(),
                title: "Fraud Reconstruction Summary".to_string(),
                purpose: "Timeline + evidence bundle".to_string(),
                actions: all_actions,
            },
        ]
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::new()
    }
}
