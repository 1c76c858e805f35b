// File-based translation through the driver

use cpp2py::codegen::CodegenOptions;
use cpp2py::driver::translate_file;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_translate_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loop.cpp");
    fs::write(
        &path,
        "#include <iostream>\nfor (int i = 0; i < 3; i++) {\n    cout << i << endl;\n}\n",
    )
    .unwrap();

    let translation = translate_file(&path, &CodegenOptions::default()).unwrap();

    assert!(translation.is_ok());
    assert!(translation.source.starts_with("#include <iostream>"));
    assert_eq!(
        translation.rendered(),
        "for i in range(0, 3):\n    print(i, end='\\n')\n"
    );
}

#[test]
fn test_translation_error_is_not_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.cpp");
    fs::write(&path, "int x = 1;\nint y = 2\n").unwrap();

    let translation = translate_file(&path, &CodegenOptions::default()).unwrap();

    assert!(!translation.is_ok());
    assert_eq!(translation.error_line(), Some(3));
    assert!(translation
        .rendered()
        .ends_with("unexpected end of input, expected ';' after declaration"));
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.cpp");

    let err = translate_file(&path, &CodegenOptions::default()).unwrap_err();

    assert!(format!("{:#}", err).contains("absent.cpp"));
}

#[test]
fn test_indent_option_is_applied() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("indent.cpp");
    fs::write(&path, "while (n > 0) { n = n - 1; }").unwrap();

    let options = CodegenOptions::default().with_indent_width(8);
    let translation = translate_file(&path, &options).unwrap();

    assert_eq!(translation.rendered(), "while n > 0:\n        n = n - 1\n");
}
