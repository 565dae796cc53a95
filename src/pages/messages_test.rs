use super::*;

#[test]
fn compose_accepts_numeric_receiver_and_body() {
    let message = validate_compose_input(" 42 ", " Hola ", " ¿Qué tal? ").expect("valid input");
    assert_eq!(message.receiver_id, 42);
    assert_eq!(message.subject, "Hola");
    assert_eq!(message.body, "¿Qué tal?");
}

#[test]
fn compose_allows_an_empty_subject() {
    let message = validate_compose_input("1", "", "hola").expect("valid input");
    assert_eq!(message.subject, "");
}

#[test]
fn compose_rejects_non_numeric_receiver() {
    assert_eq!(
        validate_compose_input("paco", "x", "hola"),
        Err("Introduce un destinatario válido.")
    );
}

#[test]
fn compose_rejects_blank_body() {
    assert_eq!(
        validate_compose_input("1", "x", "   "),
        Err("El mensaje no puede estar vacío.")
    );
}
