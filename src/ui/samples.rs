use clap::ValueEnum;

/// Built-in example documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Sample {
    Economy,
    Technology,
    Climate,
}

impl Sample {
    pub const ALL: [Sample; 3] = [Sample::Economy, Sample::Technology, Sample::Climate];

    pub fn title(&self) -> &'static str {
        match self {
            Sample::Economy => "Kinh tế Việt Nam",
            Sample::Technology => "Công nghệ AI",
            Sample::Climate => "Biến đổi khí hậu",
        }
    }

    /// Command-line name, as accepted by `--sample`
    pub fn key(&self) -> &'static str {
        match self {
            Sample::Economy => "economy",
            Sample::Technology => "technology",
            Sample::Climate => "climate",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Sample::Economy => ECONOMY,
            Sample::Technology => TECHNOLOGY,
            Sample::Climate => CLIMATE,
        }
    }

    /// Look up by key or by title, ignoring case
    pub fn find(name: &str) -> Option<Sample> {
        let name = name.trim();
        Self::ALL.into_iter().find(|s| {
            s.key().eq_ignore_ascii_case(name) || s.title().to_lowercase() == name.to_lowercase()
        })
    }
}

const ECONOMY: &str = "Việt Nam đã ghi nhận những thành tựu đáng kể trong phát triển kinh tế trong những năm gần đây. GDP của nước ta đã tăng trưởng ổn định với tốc độ bình quân 6-7% mỗi năm, thu hút được nhiều nhà đầu tư nước ngoài từ các tập đoàn lớn trên thế giới. Các ngành công nghiệp như điện tử, dệt may, và nông nghiệp đã có những bước tiến vượt bậc, góp phần quan trọng vào xuất khẩu. Chính phủ cũng đã triển khai nhiều chính sách hỗ trợ doanh nghiệp nhỏ và vừa, tạo điều kiện thuận lợi cho sự phát triển của khu vực tư nhân và khởi nghiệp.";

const TECHNOLOGY: &str = "Trí tuệ nhân tạo (AI) đang trở thành một trong những công nghệ quan trọng nhất của thế kỷ 21. Với khả năng xử lý dữ liệu lớn và học hỏi từ kinh nghiệm, AI đã được ứng dụng rộng rãi trong nhiều lĩnh vực từ y tế, giáo dục, giao thông đến tài chính và thương mại điện tử. Các công ty công nghệ lớn như Google, Microsoft, và OpenAI đang đầu tư mạnh mẽ vào nghiên cứu và phát triển AI. Tuy nhiên, sự phát triển của AI cũng đặt ra nhiều thách thức về đạo đức, việc làm, quyền riêng tư và an ninh mạng mà xã hội cần giải quyết.";

const CLIMATE: &str = "Biến đổi khí hậu đang là một trong những thách thức lớn nhất mà nhân loại phải đối mặt trong thế kỷ này. Nhiệt độ trái đất liên tục tăng cao do hoạt động phát thải khí nhà kính từ con người, dẫn đến băng tan ở hai cực, mực nước biển dâng cao và các hiện tượng thời tiết cực đoan ngày càng gia tăng như bão lũ, hạn hán. Các quốc gia trên thế giới đang nỗ lực giảm phát thải khí nhà kính thông qua việc chuyển đổi sang năng lượng tái tạo, áp dụng các công nghệ sạch và thúc đẩy phát triển bền vững.";
