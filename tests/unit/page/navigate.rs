use super::*;

#[test]
fn recording_navigator_keeps_order() {
    let mut nav = RecordingNavigator::new();
    nav.navigate("/courses/a");
    nav.navigate("/courses/b");
    assert_eq!(nav.visited(), &["/courses/a".to_string(), "/courses/b".to_string()]);
}

#[test]
fn closures_are_navigators() {
    let mut seen = Vec::new();
    {
        let mut nav = |t: &str| seen.push(t.to_string());
        nav.navigate("/courses/x");
    }
    assert_eq!(seen, vec!["/courses/x".to_string()]);
}
