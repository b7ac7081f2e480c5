//! Conversation state machine
//!
//! Drives one turn at a time: given the user's session and message, decide
//! the next stage, mutate the session and produce the outbound response.
//! All transitions here are pure, synchronous computations; anything that
//! touches a collaborator (submission, status lookup) is handed back to the
//! engine as a [`TurnOutcome`] effect.

use regex::Regex;

use cybersathi_config::{
    branch_menu, confirmation_menu, welcome_menu, FieldKind, FieldPrompts, MessageTemplates,
};
use cybersathi_core::{
    ComplaintField, ConversationStage, FraudBranch, Intent, Platform, Response, Session,
};
use cybersathi_nlu::NluAnalyzer;

/// What the engine must do after a turn. `Reply` variants carry the
/// response; `Submit`/`Track` require collaborator calls the machine itself
/// never makes.
#[derive(Debug)]
pub enum TurnOutcome {
    /// Persist the (possibly mutated) session and send the response
    Reply(Response),
    /// Clear the session, then send the response
    ClearAndReply(Response),
    /// User confirmed: generate a ticket, persist the record, finish
    Submit,
    /// User supplied a ticket-shaped ID: look up its status
    Track { ticket_id: String },
}

/// Stage-transition logic. Holds the NLU analyzer and all prompt
/// configuration; stateless across turns.
pub struct StateMachine {
    nlu: NluAnalyzer,
    prompts: FieldPrompts,
    templates: MessageTemplates,
    incident_date_re: Regex,
}

impl StateMachine {
    pub fn new(prompts: FieldPrompts, templates: MessageTemplates) -> Self {
        Self {
            nlu: NluAnalyzer::new(),
            prompts,
            templates,
            incident_date_re: Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{4}$")
                .expect("incident date pattern must compile"),
        }
    }

    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }

    /// Process one turn. Mutates the session in place; the caller owns
    /// persistence and any collaborator effects.
    pub fn advance(&self, session: &mut Session, text: &str) -> TurnOutcome {
        match session.stage {
            ConversationStage::Initial => self.handle_initial(session, text),
            ConversationStage::AwaitingFraudType => self.handle_fraud_type(session, text),
            ConversationStage::Collecting { current } => {
                self.handle_collecting(session, current, text)
            }
            ConversationStage::Confirmation => self.handle_confirmation(text),
            ConversationStage::Tracking => self.handle_tracking(text),
            // A completed session is cleared on submission; if one is ever
            // observed here, start over.
            ConversationStage::Completed => {
                session.stage = ConversationStage::Initial;
                self.handle_initial(session, text)
            }
        }
    }

    fn handle_initial(&self, session: &mut Session, text: &str) -> TurnOutcome {
        let analysis = self.nlu.analyze(text);
        tracing::debug!(intent = %analysis.intent, branch = %analysis.branch, "classified inbound message");

        match analysis.intent {
            Intent::CheckStatus => {
                session.stage = ConversationStage::Tracking;
                TurnOutcome::Reply(Response::text(&self.templates.tracking_prompt))
            }
            // Single-shot informational reply; no multi-step unfreeze flow.
            Intent::AccountUnfreeze => {
                TurnOutcome::Reply(Response::text(&self.templates.unfreeze_info))
            }
            intent if intent.starts_complaint() => {
                session.stage = ConversationStage::AwaitingFraudType;
                session.branch = Some(analysis.branch);
                TurnOutcome::Reply(self.branch_menu_response(analysis.branch, analysis.platform))
            }
            _ => TurnOutcome::Reply(Response::with_options(
                &self.templates.welcome,
                welcome_menu(),
            )),
        }
    }

    fn branch_menu_response(&self, branch: FraudBranch, platform: Platform) -> Response {
        let text = match branch {
            FraudBranch::Financial => self.templates.financial_menu.clone(),
            FraudBranch::SocialMedia => {
                if platform == Platform::Unknown {
                    self.templates.social_media_menu.clone()
                } else {
                    format!(
                        "{}\n\nPlatform: {}",
                        self.templates.social_media_menu,
                        platform.display_name()
                    )
                }
            }
            FraudBranch::Other => self.templates.generic_menu.clone(),
        };
        Response::with_options(text, branch_menu(branch))
    }

    fn handle_fraud_type(&self, session: &mut Session, text: &str) -> TurnOutcome {
        let selection = text.trim();
        if selection.is_empty() {
            let branch = session.branch.unwrap_or(FraudBranch::Other);
            return TurnOutcome::Reply(self.branch_menu_response(branch, Platform::Unknown));
        }

        session.set_field(ComplaintField::FraudType, selection);
        let first = ComplaintField::first();
        session.stage = ConversationStage::Collecting { current: first };
        TurnOutcome::Reply(self.field_prompt(first))
    }

    fn handle_collecting(
        &self,
        session: &mut Session,
        current: ComplaintField,
        text: &str,
    ) -> TurnOutcome {
        let answer = text.trim();
        let spec = self.prompts.spec(current);

        if !self.is_valid_answer(spec.kind, answer) {
            // Same prompt again; the cursor does not move.
            let mut response = self.field_prompt(current);
            response.text = format!("{}\n\n{}", spec.error, response.text);
            return TurnOutcome::Reply(response);
        }

        session.set_field(current, answer);
        match current.next() {
            Some(next) => {
                session.stage = ConversationStage::Collecting { current: next };
                TurnOutcome::Reply(self.field_prompt(next))
            }
            None => {
                session.stage = ConversationStage::Confirmation;
                TurnOutcome::Reply(Response::with_options(
                    self.summary(session),
                    confirmation_menu(),
                ))
            }
        }
    }

    fn is_valid_answer(&self, kind: FieldKind, answer: &str) -> bool {
        if answer.is_empty() {
            return false;
        }
        match kind {
            FieldKind::FreeText => true,
            FieldKind::Date => self.incident_date_re.is_match(answer),
            FieldKind::Phone => cybersathi_validation::is_valid_phone(answer),
            FieldKind::Email => cybersathi_validation::is_valid_email(answer),
        }
    }

    fn field_prompt(&self, field: ComplaintField) -> Response {
        let spec = self.prompts.spec(field);
        Response::with_options(spec.prompt.clone(), spec.options.clone())
    }

    /// Human-readable summary of everything collected, shown before
    /// submission.
    fn summary(&self, session: &Session) -> String {
        let get = |field: ComplaintField| session.field(field).unwrap_or("N/A");
        let description = get(ComplaintField::IncidentDescription);
        let short_description: String = description.chars().take(100).collect();
        let ellipsis = if description.chars().count() > 100 { "..." } else { "" };

        format!(
            "📋 COMPLAINT SUMMARY\n\n\
             🔖 Fraud Type: {}\n\
             📝 Description: {short_description}{ellipsis}\n\
             📅 Date & Time: {} {}\n\
             💰 Amount Lost: ₹{}\n\
             🔍 Suspect: {} ({})\n\n\
             👤 Your Details:\n\
             • Name: {}\n\
             • Phone: {}\n\
             • Email: {}\n\
             • Location: {}\n\
             • Police Report: {}\n\
             • Additional Info: {}\n\n\
             {}",
            get(ComplaintField::FraudType),
            get(ComplaintField::IncidentDate),
            get(ComplaintField::IncidentTime),
            get(ComplaintField::AmountLost),
            get(ComplaintField::SuspectInfo),
            get(ComplaintField::SuspectContact),
            get(ComplaintField::ReporterName),
            get(ComplaintField::ReporterPhone),
            get(ComplaintField::ReporterEmail),
            get(ComplaintField::Location),
            get(ComplaintField::PoliceReportFiled),
            get(ComplaintField::AdditionalInfo),
            self.templates.confirmation_footer,
        )
    }

    fn handle_confirmation(&self, text: &str) -> TurnOutcome {
        let lower = text.to_lowercase();
        // Affirmatives are checked first, mirroring the original flow:
        // "I confirm, no changes" submits.
        if lower.contains("confirm") || lower.contains("yes") || lower.contains("submit") {
            TurnOutcome::Submit
        } else if lower.contains("cancel") || lower.contains("no") {
            TurnOutcome::ClearAndReply(Response::text(&self.templates.cancelled))
        } else if lower.contains("edit") {
            // Deliberate product gap: no edit flow yet.
            TurnOutcome::Reply(Response::text(&self.templates.edit_unavailable))
        } else {
            TurnOutcome::Reply(Response::with_options(
                &self.templates.confirm_reprompt,
                confirmation_menu(),
            ))
        }
    }

    fn handle_tracking(&self, text: &str) -> TurnOutcome {
        let ticket_id = text.trim().to_uppercase();
        if ticket_id.starts_with("CS-") || ticket_id.starts_with("NCRP-") {
            TurnOutcome::Track { ticket_id }
        } else {
            TurnOutcome::Reply(Response::text(&self.templates.invalid_ticket))
        }
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new(FieldPrompts::default(), MessageTemplates::default())
    }
}
