//! 示例测验
//!
//! 首次运行时用来预填输入文件的标准示例，覆盖四种常用题型。

/// 标准示例测验文本
pub const SAMPLE_QUIZ: &str = r"### **Chapter 1: Sample Questions**

1. What is 2+3?
a) 6
b) 1
*c) 5
d) 10

2. Which of the following are dinosaurs?
[ ] Woolly mammoth
[*] Tyrannosaurus rex
[*] Triceratops
[ ] Smilodon fatalis

3. Who lives at the North Pole?
* Santa
* Santa Claus
* Father Christmas

4. Water is liquid.
*a) True
b) False";
