use crate::enums::candidate_stage::CandidateStage;
use crate::enums::notice_level::NoticeLevel;
use crate::errors::HrResult;
use crate::services::hr::candidate_service::CandidateService;
use crate::structs::hr::candidate::{Candidate, CandidateStageUpdate};
use crate::traits::notifier::Notifier;

pub const MOVE_SUCCESS: &str = "Cập nhật trạng thái ứng viên thành công";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub stage: CandidateStage,
    pub cards: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Unchanged,
    Moved { from: CandidateStage, to: CandidateStage },
}

/// A card taken off its column and not yet confirmed by the backend.
#[derive(Debug)]
pub struct PendingMove {
    pub id: i64,
    pub from: CandidateStage,
    pub to: CandidateStage,
}

/// Recruitment pipeline grouped into one column per stage, in stage order.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateBoard {
    columns: Vec<BoardColumn>,
}

impl CandidateBoard {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let mut board = Self {
            columns: CandidateStage::ALL
                .iter()
                .map(|stage| BoardColumn { stage: *stage, cards: Vec::new() })
                .collect(),
        };

        for candidate in candidates {
            let stage = candidate.stage();
            board.column_mut(stage).cards.push(candidate);
        }
        board
    }

    pub fn columns(&self) -> &[BoardColumn] {
        &self.columns
    }

    pub fn column(&self, stage: CandidateStage) -> &BoardColumn {
        &self.columns[stage_index(stage)]
    }

    fn column_mut(&mut self, stage: CandidateStage) -> &mut BoardColumn {
        &mut self.columns[stage_index(stage)]
    }

    pub fn locate(&self, id: i64) -> Option<CandidateStage> {
        self.columns
            .iter()
            .find(|column| column.cards.iter().any(|card| card.id == id))
            .map(|column| column.stage)
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the card locally. `None` when the card is unknown or already in `to`.
    pub fn begin_move(&mut self, id: i64, to: CandidateStage) -> Option<PendingMove> {
        let from = self.locate(id)?;
        if from == to {
            return None;
        }

        self.relocate(id, from, to);
        Some(PendingMove { id, from, to })
    }

    /// Put a card back where it was before [`CandidateBoard::begin_move`].
    pub fn revert(&mut self, pending: &PendingMove) {
        self.relocate(pending.id, pending.to, pending.from);
    }

    fn relocate(&mut self, id: i64, from: CandidateStage, to: CandidateStage) {
        let source = self.column_mut(from);
        let Some(position) = source.cards.iter().position(|card| card.id == id) else {
            return;
        };

        let mut card = source.cards.remove(position);
        card.trang_thai_hien_tai = Some(to.code());
        self.column_mut(to).cards.push(card);
    }

    /// Move a card and persist its new stage. The local move is undone if the backend
    /// does not accept it.
    pub async fn move_card(
        &mut self,
        id: i64,
        to: CandidateStage,
        service: &CandidateService<'_>,
        notifier: &dyn Notifier,
    ) -> HrResult<MoveOutcome> {
        let Some(pending) = self.begin_move(id, to) else {
            log::debug!("Candidate {} already in {}, nothing to do", id, to.title());
            return Ok(MoveOutcome::Unchanged);
        };

        let update = CandidateStageUpdate {
            id,
            trang_thai_hien_tai: to.code(),
        };

        match service.update(&update).await {
            Ok(_) => {
                notifier.notify(MOVE_SUCCESS, NoticeLevel::Success);
                Ok(MoveOutcome::Moved { from: pending.from, to: pending.to })
            }
            Err(e) => {
                log::warn!("⚠️ Moving candidate {} failed, restoring {}", id, pending.from.title());
                self.revert(&pending);
                Err(e)
            }
        }
    }
}

fn stage_index(stage: CandidateStage) -> usize {
    CandidateStage::ALL
        .iter()
        .position(|s| *s == stage)
        .unwrap_or(0)
}
