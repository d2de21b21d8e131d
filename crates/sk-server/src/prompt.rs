use sk_render::SCENE_NAME;

/// Wraps a user prompt in the fixed instruction template for scene-code
/// generation. Deterministic: the same prompt always yields the same
/// instruction text.
pub fn build_prompt(user_prompt: &str) -> String {
    format!(
        r#"You are a Python code generator. Create ONLY executable Python code using Manim to visualize the following concept:

{user_prompt}
Requirements:

1. ONLY output Python code. No explanations or markdown.
2. Start with from manim import *
3. Define a Scene subclass named {SCENE_NAME} with a construct method.
4. Use only valid, executable Manim code that works with the standard manim CLI (e.g., manim -pql file.py {SCENE_NAME})
5. For all mathematical symbols, use LaTeX syntax inside MathTex(...) with raw strings (e.g., MathTex(r"\alpha + \beta = \gamma"))
6. NEVER use raw Unicode for Greek letters or math symbols. ALWAYS use LaTeX equivalents.
7. Do not use Text(...) for any content that includes math symbols; use MathTex(...) instead.
8. The code must be complete, syntactically correct, and ready to run.
9. NO broken LaTeX expressions. Check escape sequences, backslashes, and curly braces carefully.
10. No comments, explanations, or markdown in the output, just the raw Python code.
11. VERY IMPORTANT: do not forget to import every module the generated code needs.
12. Use nicer colors.

Return just the Python code and nothing else."#
    )
}
