use crate::models::Condition;

pub fn suggested_action(condition: Condition) -> &'static str {
    match condition {
        Condition::Drought => "Implement irrigation strategies to conserve water.",
        Condition::Flood => "Implement drainage solutions to avoid crop damage.",
        Condition::Normal => "Maintain regular crop monitoring.",
    }
}
