//! Fixed persona prompt for the wedding-invitation sales assistant.
//!
//! The package table is the single source of the prices the assistant must
//! quote; the prompt is assembled from it so the two cannot drift apart.

/// An invitation package offered by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Package {
    pub name: &'static str,
    pub price: &'static str,
}

/// Packages and prices, quoted verbatim by the assistant.
pub const PACKAGES: [Package; 4] = [
    Package { name: "Normal", price: "169k" },
    Package { name: "Pro", price: "289k" },
    Package { name: "VIP", price: "510k" },
    Package { name: "SVIP", price: "730k" },
];

/// Zalo number customers are pointed to when they want a human.
pub const CONTACT_ZALO: &str = "0967021887";

/// Build the system instruction sent with every completion request.
pub fn system_prompt() -> String {
    let prices = PACKAGES
        .iter()
        .map(|p| format!("{} {}", p.name, p.price))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Bạn là chatbot tư vấn thiệp cưới ONLINE của PudFoods. \
         Luôn nhấn mạnh đây là thiệp điện tử, gửi qua link cá nhân hóa, không phải in giấy. \
         Trả lời ngắn gọn, thân thiện, chuyên nghiệp. \
         Thông tin giá: {prices}. \
         Tất cả các gói đều là thiệp điện tử với link cá nhân hóa. \
         Nếu khách cần đặt thiệp thì hướng dẫn liên hệ Zalo {CONTACT_ZALO}."
    )
}
