mod load_state_footer;
pub use load_state_footer::LoadStateFooter;

mod new_review_dialog;
pub use new_review_dialog::NewReviewDialog;

mod review_card;
pub use review_card::ReviewCard;
