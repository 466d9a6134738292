use secret_text::Secret;

fn connect(password: &str) -> usize {
    password.len()
}

fn main() {
    let password = Secret::from("hunter2");
    let copy = password.clone();
    assert_eq!(connect(password.expose()), 7);
    assert_eq!(copy.to_string(), "*****");
}
