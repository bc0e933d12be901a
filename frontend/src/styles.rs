pub const APP_SHELL: &str = "min-h-screen w-full bg-gray-50 dark:bg-gray-900 flex items-center justify-center";
pub const PAGE: &str = "flex w-full flex-col items-center justify-between gap-5 px-4 py-10";
pub const CARD: &str = "bg-white dark:bg-gray-800 p-6 sm:p-8 rounded-2xl shadow-xl max-w-2xl mx-auto border border-gray-100 dark:border-gray-700";
pub const WHEEL_WRAP: &str = "relative mx-auto mb-8 flex justify-center items-center w-full max-w-[450px]";
pub const POINTER: &str = "absolute -top-2 left-1/2 -translate-x-1/2 text-3xl text-[#031926] dark:text-amber-400 drop-shadow";
pub const CANVAS: &str = "w-full max-w-[450px] h-auto rounded-full shadow-lg";
pub const LOCKED_SCREEN: &str = "w-full h-full min-h-screen flex flex-col gap-5 pt-10 items-center justify-center";
pub const LOCKED_TITLE: &str = "text-3xl font-semibold text-gray-400";
pub const RESULT_WRAP: &str = "mb-6 mt-2 text-center";
pub const RESULT_WIN: &str = "font-semibold text-xl text-green-500";
pub const RESULT_LOSS: &str = "font-semibold text-xl text-red-500";
pub const RESULT_RETRY: &str = "font-semibold text-xl text-amber-500";
pub const SPIN_BUTTON: &str = "w-full max-w-[300px] px-8 py-4 rounded-3xl bg-[#031926] text-white text-lg font-bold cursor-pointer transition-all active:bg-white active:text-[#031926]";
pub const SPIN_BUTTON_DISABLED: &str = "w-full max-w-[300px] px-8 py-4 rounded-3xl bg-gray-400 text-white text-lg font-bold opacity-75 cursor-not-allowed";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 rounded-full border-2 border-gray-300 border-t-blue-600";
